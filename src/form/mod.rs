//! Form validation: per-field touched state over a form's data, and the
//! session facade the UI talks to.

mod data;
mod session;

pub use data::FormData;
pub use session::{FieldView, FormRules, ValidationOptions, ValidationSession, use_form_validation};
