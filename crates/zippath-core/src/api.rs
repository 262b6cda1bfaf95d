//! High-level entry points.

use crate::Result;
use crate::ZipPathConfig;
use crate::ZipPathError;
use crate::ZipPathReport;
use crate::archive::ArchiveWriter;
use crate::filters::ExclusionSet;
use crate::options::TaskOptions;
use crate::paths;
use crate::sidecar;
use crate::walker::PruningWalker;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;
use tracing::debug;
use tracing::info;

/// Runs the task from a host options record.
///
/// Equivalent to `zip_path(&options.resolve()?)`.
///
/// # Errors
///
/// Returns [`crate::ZipPathError::MissingRequiredOption`] before touching the
/// filesystem if `path` is absent, and otherwise whatever [`zip_path`]
/// returns.
pub fn run_task(options: TaskOptions) -> Result<ZipPathReport> {
    zip_path(&options.resolve()?)
}

/// Compresses `config.path` into a zip archive.
///
/// Steps, in order: resolve and check the source, pick the destination
/// (explicit or derived), create its parent directories, write the archive,
/// then write the sidecar if asked to.
///
/// # Examples
///
/// ```no_run
/// use zippath_core::ZipPathConfig;
/// use zippath_core::zip_path;
///
/// let config = ZipPathConfig::new("force-app/staticresources/site")
///     .with_exclude_patterns(vec!["*.map".into(), "node_modules".into()])
///     .with_include_meta(true);
/// let report = zip_path(&config)?;
/// println!("{}", report.archive_path.display());
/// # Ok::<(), zippath_core::ZipPathError>(())
/// ```
///
/// # Errors
///
/// - [`crate::ZipPathError::PathNotFound`] if the source does not exist;
///   nothing is created in that case.
/// - [`crate::ZipPathError::InvalidPattern`] if a pattern does not compile;
///   also raised before anything is created.
/// - [`crate::ZipPathError::OutputIsSource`] if a single-file source would be
///   overwritten by its own archive (e.g. compressing `bundle.zip` with the
///   default output).
/// - [`crate::ZipPathError::Io`] for any filesystem failure. A partially
///   written archive may be left on disk.
pub fn zip_path(config: &ZipPathConfig) -> Result<ZipPathReport> {
    let start = Instant::now();

    let source = paths::resolve_source(&config.path)?;
    let is_dir = source.is_dir();
    let exclusions = ExclusionSet::new(&config.exclude_patterns)?;

    let output = match &config.output {
        Some(output) => paths::resolve_output(output)?,
        None => paths::default_output(&source, is_dir)?,
    };
    paths::ensure_parent_dir(&output)?;
    let output = canonical_output(&output)?;

    if output == source {
        return Err(ZipPathError::OutputIsSource { path: output });
    }

    info!("Compressing {} to {}", source.display(), output.display());

    let mut report = ZipPathReport::new(output.clone());
    let file = BufWriter::new(File::create(&output)?);
    let mut writer = ArchiveWriter::new(file);

    if is_dir {
        let mut walker = PruningWalker::new(&source, &exclusions).skipping(&output);
        for walked in walker.by_ref() {
            let walked = walked?;
            writer.add_file(&walked.path, &walked.archive_name)?;
        }
        let stats = walker.stats();
        report.files_excluded = stats.files_excluded;
        report.directories_pruned = stats.directories_pruned;
    } else {
        add_single_file(&mut writer, &source, &exclusions, &mut report)?;
    }

    report.files_added = writer.files_added();
    report.bytes_written = writer.bytes_written();
    writer.finish()?.flush()?;
    report.bytes_compressed = std::fs::metadata(&output)?.len();

    info!(
        files = report.files_added,
        excluded = report.files_excluded,
        pruned = report.directories_pruned,
        "Successfully created zip file: {}",
        output.display()
    );

    if config.include_meta {
        let meta = sidecar::write_sidecar(&output)?;
        info!("Created meta file: {}", meta.display());
        report.sidecar_path = Some(meta);
    }

    report.duration = start.elapsed();
    Ok(report)
}

/// A single-file source is stored at the archive root under its own name,
/// unless a pattern excludes it, which leaves the archive empty.
fn add_single_file(
    writer: &mut ArchiveWriter<BufWriter<File>>,
    source: &Path,
    exclusions: &ExclusionSet,
    report: &mut ZipPathReport,
) -> Result<()> {
    let parent = source.parent().unwrap_or(source);
    if exclusions.is_excluded(source, parent) {
        debug!(path = %source.display(), "excluding file");
        report.files_excluded += 1;
        return Ok(());
    }

    let name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    writer.add_file(source, &name)?;
    Ok(())
}

/// Resolves symlinks in the (now existing) parent of `output` so the walker
/// can recognise the archive if it lands inside the source tree.
fn canonical_output(output: &Path) -> Result<PathBuf> {
    match (output.parent(), output.file_name()) {
        (Some(parent), Some(name)) if !parent.as_os_str().is_empty() => {
            Ok(dunce::canonicalize(parent)?.join(name))
        }
        _ => Ok(output.to_path_buf()),
    }
}
