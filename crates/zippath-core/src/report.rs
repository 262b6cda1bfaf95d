//! Result of a zip-path run.

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

/// What a zip-path run produced.
///
/// `archive_path` and `sidecar_path` form the result record handed back to
/// the host (see [`ZipPathReport::return_values`]). The counters are for
/// display only.
///
/// # Examples
///
/// ```
/// use zippath_core::ZipPathReport;
/// use std::path::PathBuf;
///
/// let report = ZipPathReport::new(PathBuf::from("/out/site.zip"));
/// let values = report.return_values();
/// assert_eq!(values["archive_path"], "/out/site.zip");
/// assert!(!values.contains_key("sidecar_path"));
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct ZipPathReport {
    /// Where the archive was written.
    pub archive_path: PathBuf,

    /// Where the sidecar was written, if one was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidecar_path: Option<PathBuf>,

    /// Files written to the archive.
    #[serde(skip)]
    pub files_added: usize,

    /// Files dropped by an exclusion pattern.
    #[serde(skip)]
    pub files_excluded: usize,

    /// Directories pruned by an exclusion pattern.
    #[serde(skip)]
    pub directories_pruned: usize,

    /// Uncompressed bytes written.
    #[serde(skip)]
    pub bytes_written: u64,

    /// Size of the finished archive on disk.
    #[serde(skip)]
    pub bytes_compressed: u64,

    /// Wall time of the run.
    #[serde(skip)]
    pub duration: Duration,
}

impl ZipPathReport {
    /// Creates an empty report for `archive_path`.
    #[must_use]
    pub fn new(archive_path: PathBuf) -> Self {
        Self {
            archive_path,
            ..Self::default()
        }
    }

    /// The result record: `archive_path`, plus `sidecar_path` when a sidecar
    /// was written.
    #[must_use]
    pub fn return_values(&self) -> BTreeMap<&'static str, String> {
        let mut values = BTreeMap::new();
        values.insert("archive_path", self.archive_path.display().to_string());
        if let Some(sidecar) = &self.sidecar_path {
            values.insert("sidecar_path", sidecar.display().to_string());
        }
        values
    }

    /// Space saved by compression, as a percentage of the uncompressed size.
    ///
    /// Returns 0.0 when nothing was written. The archive's own headers are
    /// counted, so tiny inputs can come out negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use zippath_core::ZipPathReport;
    ///
    /// let mut report = ZipPathReport::default();
    /// report.bytes_written = 1000;
    /// report.bytes_compressed = 250;
    /// assert_eq!(report.compression_percentage(), 75.0);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compression_percentage(&self) -> f64 {
        if self.bytes_written == 0 {
            return 0.0;
        }
        (1.0 - self.bytes_compressed as f64 / self.bytes_written as f64) * 100.0
    }
}
