pub mod form;
pub mod submission;

pub use form::{ContactForm, ContactRequest, Field, FieldErrors, Subject};
pub use submission::{submit, Receipt};
