//! Per-run results and the JSON report written from them

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::ExitPolicy;
use crate::verification::InvalidReason;

pub mod generator;

pub use generator::ReportGenerator;

/// What happened to one discovered file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum FileOutcome {
    /// Valid document, all-lowercase name
    Compliant { pages: usize },
    /// Valid document whose name contains an uppercase letter
    UppercaseName { pages: usize },
    /// Invalid document, removed from disk
    Deleted { reason: InvalidReason },
    /// Invalid document that a dry run would have removed
    WouldDelete { reason: InvalidReason },
    /// Invalid document that could not be removed
    DeleteFailed { reason: InvalidReason, error: String },
    /// Invalid document spared by the deletion policy
    Kept { reason: InvalidReason },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

/// Counters over a [`ScanReport`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub discovered: usize,
    pub valid: usize,
    pub invalid: usize,
    pub deleted: usize,
    pub delete_failures: usize,
    pub uppercase_names: usize,
    pub walk_errors: usize,
}

/// Everything a single sweep observed, in processing order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanReport {
    pub root: PathBuf,
    pub extension: String,
    pub dry_run: bool,
    pub started_at: String,
    pub files: Vec<FileRecord>,
    pub walk_errors: Vec<String>,
}

impl ScanReport {
    pub fn summary(&self) -> ReportSummary {
        let mut summary = ReportSummary {
            discovered: self.files.len(),
            walk_errors: self.walk_errors.len(),
            ..ReportSummary::default()
        };
        for record in &self.files {
            match &record.outcome {
                FileOutcome::Compliant { .. } => summary.valid += 1,
                FileOutcome::UppercaseName { .. } => {
                    summary.valid += 1;
                    summary.uppercase_names += 1;
                }
                FileOutcome::Deleted { .. } => {
                    summary.invalid += 1;
                    summary.deleted += 1;
                }
                FileOutcome::DeleteFailed { .. } => {
                    summary.invalid += 1;
                    summary.delete_failures += 1;
                }
                FileOutcome::WouldDelete { .. } | FileOutcome::Kept { .. } => summary.invalid += 1,
            }
        }
        summary
    }

    /// Whether the run counts as a success under `policy`
    pub fn succeeded(&self, policy: ExitPolicy) -> bool {
        let summary = self.summary();
        match policy {
            ExitPolicy::AlwaysSucceed => true,
            ExitPolicy::FailOnDeleteError => summary.delete_failures == 0,
            ExitPolicy::FailOnInvalid => summary.invalid == 0 && summary.delete_failures == 0,
        }
    }
}
