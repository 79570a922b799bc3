//! Configuration types and validation for a sweep run

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Directory searched when no root is given
pub const DEFAULT_ROOT: &str = "./PDFs";

/// Extension searched when none is given
pub const DEFAULT_EXTENSION: &str = ".pdf";

/// Which invalid files are eligible for deletion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeletePolicy {
    /// Delete every file that fails validation
    All,
    /// Delete only files the PDF parser rejected or that have no pages.
    /// Files that failed for I/O or other unexpected reasons are kept.
    CorruptOnly,
}

/// How the outcome of a run maps to the process exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExitPolicy {
    /// Always report success once the run completes
    AlwaysSucceed,
    /// Fail if any deletion failed
    FailOnDeleteError,
    /// Fail if any invalid file was found or any deletion failed
    FailOnInvalid,
}

/// Global sweep configuration, passed into the pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    pub root: PathBuf,
    pub extension: String,
    pub dry_run: bool,
    pub delete_policy: DeletePolicy,
    pub exit_policy: ExitPolicy,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            extension: DEFAULT_EXTENSION.to_string(),
            dry_run: false,
            delete_policy: DeletePolicy::All,
            exit_policy: ExitPolicy::AlwaysSucceed,
        }
    }
}

impl ScanConfig {
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_delete_policy(mut self, policy: DeletePolicy) -> Self {
        self.delete_policy = policy;
        self
    }

    pub fn with_exit_policy(mut self, policy: ExitPolicy) -> Self {
        self.exit_policy = policy;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.root.as_os_str().is_empty() {
            return Err(Error::InvalidConfiguration("root directory must not be empty".into()));
        }
        let ext = self.extension.trim_start_matches('.');
        if ext.is_empty() {
            return Err(Error::InvalidConfiguration(format!(
                "extension '{}' has no characters after the dot",
                self.extension
            )));
        }
        Ok(())
    }
}
