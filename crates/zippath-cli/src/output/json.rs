//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use zippath_core::ZipPathReport;

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

/// The result record plus run statistics.
#[derive(Serialize)]
struct ZipOutput<'a> {
    #[serde(flatten)]
    record: &'a ZipPathReport,
    files_added: usize,
    files_excluded: usize,
    directories_pruned: usize,
    bytes_written: u64,
    bytes_compressed: u64,
    duration_ms: u128,
}

impl<'a> From<&'a ZipPathReport> for ZipOutput<'a> {
    fn from(report: &'a ZipPathReport) -> Self {
        Self {
            record: report,
            files_added: report.files_added,
            files_excluded: report.files_excluded,
            directories_pruned: report.directories_pruned,
            bytes_written: report.bytes_written,
            bytes_compressed: report.bytes_compressed,
            duration_ms: report.duration.as_millis(),
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_zip_result(&self, report: &ZipPathReport) -> Result<()> {
        let output = JsonOutput::success("zip", ZipOutput::from(report));
        Self::output(&output)
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::<()>::error("zip", format!("{error:?}"));
        let _ = Self::output(&output);
    }
}
