//! Sweep orchestration: discover, validate, delete or inspect
//!
//! Files are handled strictly one at a time. A file that fails validation
//! goes to the remover and its processing ends there, whether or not the
//! removal worked. A valid file only has its name inspected.

use chrono::Utc;
use std::path::Path;
use tracing::{error, info, warn};

use crate::analyzer::{file_name_of, has_uppercase};
use crate::cleaner;
use crate::config::{DeletePolicy, ScanConfig};
use crate::error::Result;
use crate::report::{FileOutcome, FileRecord, ScanReport};
use crate::scanner::{self, ExtensionFilter};
use crate::verification::{self, InvalidReason, Validation};

const SEPARATOR: &str = "----------------------------------------";

pub struct Pipeline {
    config: ScanConfig,
    filter: ExtensionFilter,
}

impl Pipeline {
    pub fn new(config: ScanConfig) -> Self {
        let filter = ExtensionFilter::new(&config.extension);
        Self { config, filter }
    }

    /// Runs one sweep over the configured root.
    ///
    /// Only an invalid configuration is returned as an error. Per-file
    /// failures are logged and recorded in the report.
    pub fn execute(&self) -> Result<ScanReport> {
        self.config.validate()?;

        let mut report = ScanReport {
            root: self.config.root.clone(),
            extension: self.filter.to_string(),
            dry_run: self.config.dry_run,
            started_at: Utc::now().to_rfc3339(),
            ..ScanReport::default()
        };

        info!("Starting PDF processing in directory: {}", self.config.root.display());
        info!("Searching for files with extension: {}", self.filter);
        if self.config.dry_run {
            info!("Dry run mode - no files will be deleted");
        }
        info!("{}", SEPARATOR);

        let walked = scanner::walk(&self.config.root, &self.filter);
        for err in &walked.errors {
            error!("{}", err);
            report.walk_errors.push(err.to_string());
        }

        if walked.files.is_empty() {
            info!(
                "No {} files found in '{}'. Exiting.",
                self.filter,
                self.config.root.display()
            );
            return Ok(report);
        }

        info!("Found {} files to process.", walked.files.len());
        info!("{}", SEPARATOR);

        for path in walked.files {
            let outcome = self.process_file(&path);
            report.files.push(FileRecord { path, outcome });
        }

        let summary = report.summary();
        info!(
            "Processed {} file(s): {} valid ({} with uppercase names), {} invalid, {} deleted, {} deletion failure(s)",
            summary.discovered,
            summary.valid,
            summary.uppercase_names,
            summary.invalid,
            summary.deleted,
            summary.delete_failures
        );

        Ok(report)
    }

    /// Validates one file and then either removes it or inspects its name.
    pub fn process_file(&self, path: &Path) -> FileOutcome {
        let name = file_name_of(path);
        info!("Processing: {}", name);

        match verification::validate(path) {
            Validation::Invalid(reason) => {
                warn!("File '{}': {}", path.display(), reason);
                self.dispose_invalid(path, &name, reason)
            }
            Validation::Valid { pages } => {
                let outcome = if has_uppercase(&name) {
                    warn!("Warning: Uppercase letter(s) found in filename: {}", name);
                    FileOutcome::UppercaseName { pages }
                } else {
                    info!("Valid PDF and filename complies with case requirement.");
                    FileOutcome::Compliant { pages }
                };
                info!("{}", SEPARATOR);
                outcome
            }
        }
    }

    fn dispose_invalid(&self, path: &Path, name: &str, reason: InvalidReason) -> FileOutcome {
        if self.config.delete_policy == DeletePolicy::CorruptOnly && !reason.is_structural() {
            warn!(
                "Invalid PDF kept: {} (not a structural failure, delete policy is corrupt-only)",
                path.display()
            );
            return FileOutcome::Kept { reason };
        }

        if self.config.dry_run {
            info!("Invalid PDF detected: {}. Dry run, not deleting.", path.display());
            return FileOutcome::WouldDelete { reason };
        }

        info!("Invalid PDF detected: {}. Attempting to delete file.", path.display());
        match cleaner::remove(path) {
            Ok(()) => {
                info!("Successfully deleted invalid file: {}", name);
                FileOutcome::Deleted { reason }
            }
            Err(err) => {
                error!("Removal failed: {}", err);
                FileOutcome::DeleteFailed {
                    reason,
                    error: err.to_string(),
                }
            }
        }
    }
}
