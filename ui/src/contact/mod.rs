//! Contact slide: form model, validation, draft cache and the form view.

pub mod draft;
pub mod form;
mod view;

pub use form::{ContactForm, Field, FieldError};
pub use view::ContactPanel;
