//! Form domain layer
//!
//! Owned form data, the pure update function, and the interactive form
//! state driven by it.

mod contact_form;
mod event;
mod field;

pub use contact_form::{ContactForm, Form, BUTTONS};
pub use event::{update, FormData, FormEvent};
pub use field::FieldId;
