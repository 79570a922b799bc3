//! Document validation

pub mod document_validator;

pub use self::document_validator::{validate, InvalidReason, Validation};
