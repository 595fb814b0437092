//! Contact form domain layer
//!
//! Field value objects, validation rules, and the submission lifecycle.
//! Rendering lives in `crate::ui`; the remote send in `crate::relay`.

mod contact_form;
mod field;

pub use contact_form::{
    validate_field, ContactForm, FieldError, Form, SubmissionState, MESSAGE_MIN_LEN, SUBMIT_ROW,
};
pub use field::{FieldKind, FieldValue, FormField};
