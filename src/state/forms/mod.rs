//! Form domain layer
//!
//! Single-field forms with length validation and a submission lifecycle:
//! - `validation`: pure length checks
//! - `field`: immutable per-form configuration
//! - `form_state`: the state machine and its pure reducer
//! - `elements`: element ids and accessibility labels for rendering

mod elements;
mod field;
mod form_state;
mod validation;

pub use elements::{Element, FormElements};
pub use field::{FieldConfig, FormKind};
pub use form_state::{FormMachine, FormPhase, GatewayReply, Outcome};
pub use validation::{validate, Violation};
