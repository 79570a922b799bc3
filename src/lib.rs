//! Main library file for pdfsweep
//!
//! Walks a directory tree for PDF files, checks that each one opens and has
//! at least one page, deletes the ones that do not, and warns about file
//! names containing uppercase letters.

// Configuration and core pipeline
pub mod config;
pub mod error;
pub mod pipeline;

// Discovery
pub mod scanner;

// Validation
pub mod verification;

// Deletion
pub mod cleaner;

// File name inspection
pub mod analyzer;

// Run results
pub mod report;

// Re-exports for crate consumers
pub use config::{DeletePolicy, ExitPolicy, ScanConfig};
pub use error::{Error, Result};
pub use pipeline::Pipeline;
pub use report::{FileOutcome, FileRecord, ReportGenerator, ReportSummary, ScanReport};
