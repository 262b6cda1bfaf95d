//! Source and destination path resolution.

use crate::Result;
use crate::ZipPathError;
use std::path::Path;
use std::path::PathBuf;

/// Resolves the source to an absolute, symlink-free path.
///
/// # Errors
///
/// Returns [`ZipPathError::PathNotFound`] if the path does not exist. The
/// error carries the absolute form of the path that was looked up.
pub fn resolve_source(path: &Path) -> Result<PathBuf> {
    dunce::canonicalize(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ZipPathError::PathNotFound {
                path: std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf()),
            }
        } else {
            ZipPathError::Io(e)
        }
    })
}

/// Derives the archive path for a resolved source.
///
/// A directory `dist` becomes `dist.zip` next to it. A file has its
/// extension replaced: `notes.txt` becomes `notes.zip`, `README` becomes
/// `README.zip`.
///
/// # Errors
///
/// Returns [`ZipPathError::UnnamedSource`] if a directory source has no final
/// component (the filesystem root).
///
/// # Examples
///
/// ```
/// use zippath_core::paths::default_output;
/// use std::path::Path;
///
/// assert_eq!(
///     default_output(Path::new("/tmp/site"), true)?,
///     Path::new("/tmp/site.zip")
/// );
/// assert_eq!(
///     default_output(Path::new("/tmp/a.tar.gz"), false)?,
///     Path::new("/tmp/a.tar.zip")
/// );
/// # Ok::<(), zippath_core::ZipPathError>(())
/// ```
pub fn default_output(source: &Path, is_dir: bool) -> Result<PathBuf> {
    let name = source
        .file_name()
        .ok_or_else(|| ZipPathError::UnnamedSource {
            path: source.to_path_buf(),
        })?;

    if is_dir {
        let mut archive_name = name.to_os_string();
        archive_name.push(".zip");
        Ok(source.with_file_name(archive_name))
    } else {
        Ok(source.with_extension("zip"))
    }
}

/// Makes an explicit output path absolute against the current directory.
///
/// Symlinks are left alone since the file may not exist yet.
pub fn resolve_output(output: &Path) -> Result<PathBuf> {
    Ok(std::path::absolute(output)?)
}

/// Ensures the parent directory of `file` exists.
pub fn ensure_parent_dir(file: &Path) -> Result<()> {
    if let Some(parent) = file.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}
