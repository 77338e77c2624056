//! Application state module

mod app_state;
mod forms;
mod page_data;
mod showcase;

pub use app_state::*;
pub use forms::*;
pub use page_data::*;
pub use showcase::*;
