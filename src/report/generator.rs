//! Report generator implementation

use serde::Serialize;
use std::fs;
use std::path::Path;

use super::{ReportSummary, ScanReport};
use crate::error::Result;

#[derive(Serialize)]
struct ReportDocument<'a> {
    tool_version: &'static str,
    summary: ReportSummary,
    #[serde(flatten)]
    report: &'a ScanReport,
}

/// Writes [`ScanReport`]s to disk
pub struct ReportGenerator;

impl ReportGenerator {
    pub fn to_json(report: &ScanReport) -> Result<String> {
        let document = ReportDocument {
            tool_version: env!("CARGO_PKG_VERSION"),
            summary: report.summary(),
            report,
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }

    pub fn write_json(report: &ScanReport, path: &Path) -> Result<()> {
        let content = Self::to_json(report)?;
        fs::write(path, content)?;
        Ok(())
    }
}
