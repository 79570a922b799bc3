//! Removal of files that failed validation

pub mod file_remover;

pub use self::file_remover::{remove, RemoveError};
