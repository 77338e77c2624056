//! Form rendering module
//!
//! - `field_renderer`: the input box
//! - `form_view`: a whole single-field form with label, description,
//!   submit control and outcome message

mod field_renderer;
mod form_view;

pub use form_view::draw_form;
