//! Directory traversal with exclusion pruning.
//!
//! The walk is top-down. A directory that matches an exclusion pattern is
//! pruned as soon as it is seen. Walkdir has already opened its handle by
//! then (`read_dir`), but `skip_current_dir` drops it before any entry is
//! read. An error from that open is deferred by walkdir and dropped with
//! the handle, so nothing beneath a pruned directory is yielded or can
//! fail the walk.

use crate::Result;
use crate::filters::ExclusionSet;
use crate::filters::relative_slash_path;
use std::path::Path;
use std::path::PathBuf;
use tracing::debug;
use tracing::warn;
use walkdir::WalkDir;

/// A file that survived filtering, ready to be written to the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedFile {
    /// Full filesystem path.
    pub path: PathBuf,

    /// Member name inside the archive: relative to the root, `/`-separated.
    pub archive_name: String,
}

/// Counters collected while walking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Files dropped by an exclusion pattern.
    pub files_excluded: usize,

    /// Directories dropped (with their whole subtree) by an exclusion pattern.
    pub directories_pruned: usize,

    /// Entries that are neither regular files nor directories after following
    /// symlinks (sockets, FIFOs, devices) plus the archive itself.
    pub entries_skipped: usize,
}

/// Walks a directory tree, pruning excluded subtrees.
///
/// Yields regular files only. Symlinks to files are yielded (their target's
/// contents get archived); symlinks to directories are never descended.
///
/// # Examples
///
/// ```no_run
/// use zippath_core::filters::ExclusionSet;
/// use zippath_core::walker::PruningWalker;
/// use std::path::Path;
///
/// let exclusions = ExclusionSet::new(&["target", "*.log"])?;
/// let mut walker = PruningWalker::new(Path::new("./project"), &exclusions);
///
/// for file in walker.by_ref() {
///     println!("{}", file?.archive_name);
/// }
/// println!("pruned {} directories", walker.stats().directories_pruned);
/// # Ok::<(), zippath_core::ZipPathError>(())
/// ```
pub struct PruningWalker<'a> {
    root: PathBuf,
    exclusions: &'a ExclusionSet,
    skip: Option<PathBuf>,
    inner: walkdir::IntoIter,
    stats: WalkStats,
}

impl<'a> PruningWalker<'a> {
    /// Creates a walker rooted at `root`. The root itself is not yielded.
    #[must_use]
    pub fn new(root: &Path, exclusions: &'a ExclusionSet) -> Self {
        let inner = WalkDir::new(root)
            .follow_links(false)
            .min_depth(1)
            .into_iter();

        Self {
            root: root.to_path_buf(),
            exclusions,
            skip: None,
            inner,
            stats: WalkStats::default(),
        }
    }

    /// Never yields `path`, even if it lies under the root.
    ///
    /// Used to keep an archive that is being written inside the source tree
    /// out of itself.
    #[must_use]
    pub fn skipping(mut self, path: impl Into<PathBuf>) -> Self {
        self.skip = Some(path.into());
        self
    }

    /// Counters so far. Complete once the iterator is exhausted.
    #[must_use]
    pub fn stats(&self) -> WalkStats {
        self.stats
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclusions.is_excluded(path, &self.root)
    }
}

impl Iterator for PruningWalker<'_> {
    type Item = Result<WalkedFile>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(e.into())),
            };
            let path = entry.path();
            let file_type = entry.file_type();

            if file_type.is_dir() {
                if self.is_excluded(path) {
                    debug!(path = %path.display(), "pruning excluded directory");
                    self.inner.skip_current_dir();
                    self.stats.directories_pruned += 1;
                }
                continue;
            }

            if self.is_excluded(path) {
                debug!(path = %path.display(), "excluding file");
                self.stats.files_excluded += 1;
                continue;
            }

            if self.skip.as_deref() == Some(path) {
                debug!(path = %path.display(), "skipping the archive being written");
                self.stats.entries_skipped += 1;
                continue;
            }

            if file_type.is_symlink() {
                // Follow the link; a dangling one is an I/O error like any
                // other unreadable file.
                match std::fs::metadata(path) {
                    Ok(meta) if meta.is_file() => {}
                    Ok(meta) => {
                        if !meta.is_dir() {
                            warn!(path = %path.display(), "skipping special file");
                        }
                        self.stats.entries_skipped += 1;
                        continue;
                    }
                    Err(e) => return Some(Err(e.into())),
                }
            } else if !file_type.is_file() {
                warn!(path = %path.display(), "skipping special file");
                self.stats.entries_skipped += 1;
                continue;
            }

            return Some(Ok(WalkedFile {
                path: path.to_path_buf(),
                archive_name: relative_slash_path(path, &self.root),
            }));
        }
    }
}
