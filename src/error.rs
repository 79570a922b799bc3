//! Error types for the pdfsweep library
//!
//! Per-file failures (traversal, validation, removal) are modelled by the
//! leaf modules' own enums and never abort a run. This type covers the
//! failures that do: bad configuration and report output.

use std::{io, result::Result as StdResult};

use thiserror::Error;

/// Custom result type for pdfsweep operations
pub type Result<T> = StdResult<T, Error>;

/// Core error type for pdfsweep operations
#[derive(Error, Debug)]
#[non_exhaustive]
#[allow(clippy::enum_variant_names)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Report error: {0}")]
    ReportError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}
