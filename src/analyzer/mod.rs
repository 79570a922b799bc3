//! File name inspection

pub mod filename_inspector;

pub use self::filename_inspector::{file_name_of, has_uppercase};
