//! PDF validity check backed by lopdf
//!
//! A file is valid when lopdf parses it and the page tree holds at least
//! one page. Every other outcome is reported as an [`InvalidReason`]; this
//! module never panics outward, even if the parser does.

use std::any::Any;
use std::fs;
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use lopdf::Document;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Why a file failed validation
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "kebab-case")]
pub enum InvalidReason {
    #[error("Corrupt/Invalid - Error: {0}")]
    Corrupt(String),

    #[error("File not found")]
    NotFound,

    #[error("Unexpected Error - {0}")]
    Unexpected(String),

    #[error("Document has no pages")]
    NoPages,
}

impl InvalidReason {
    /// True when the parser itself judged the file broken, as opposed to
    /// the file being unreadable for some other reason.
    pub fn is_structural(&self) -> bool {
        matches!(self, InvalidReason::Corrupt(_) | InvalidReason::NoPages)
    }
}

/// Outcome of validating one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid { pages: usize },
    Invalid(InvalidReason),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid { .. })
    }
}

/// Opens `path` as a PDF and checks that it has at least one page.
pub fn validate(path: &Path) -> Validation {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Validation::Invalid(InvalidReason::NotFound)
        }
        Err(err) => return Validation::Invalid(InvalidReason::Unexpected(err.to_string())),
    };

    let pages = panic::catch_unwind(AssertUnwindSafe(|| {
        Document::load_mem(&bytes).map(|doc| doc.get_pages().len())
    }));

    match pages {
        Ok(Ok(0)) => Validation::Invalid(InvalidReason::NoPages),
        Ok(Ok(pages)) => {
            debug!("{} opened with {} page(s)", path.display(), pages);
            Validation::Valid { pages }
        }
        Ok(Err(err)) => Validation::Invalid(InvalidReason::Corrupt(err.to_string())),
        Err(payload) => Validation::Invalid(InvalidReason::Unexpected(format!(
            "PDF parser panicked: {}",
            panic_message(payload.as_ref())
        ))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
