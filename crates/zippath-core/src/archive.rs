//! ZIP archive writing.
//!
//! Members are deflate-compressed and named with `/` separators. Only file
//! members are written; directories exist implicitly through member names.

use crate::Result;
use std::fs::File;
use std::io::Read;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Writes files into a deflate-compressed ZIP stream.
///
/// If the writer is dropped before [`ArchiveWriter::finish`] (for example
/// because an error was propagated mid-walk), the underlying `ZipWriter`
/// still writes its central directory on drop. The partial archive is left
/// where it is.
///
/// # Examples
///
/// ```no_run
/// use zippath_core::archive::ArchiveWriter;
/// use std::fs::File;
/// use std::path::Path;
///
/// let mut writer = ArchiveWriter::new(File::create("out.zip")?);
/// writer.add_file(Path::new("README.md"), "README.md")?;
/// writer.finish()?;
/// # Ok::<(), zippath_core::ZipPathError>(())
/// ```
pub struct ArchiveWriter<W: Write + Seek> {
    zip: ZipWriter<W>,
    options: SimpleFileOptions,
    buffer: Vec<u8>,
    files_added: usize,
    bytes_written: u64,
}

impl<W: Write + Seek> ArchiveWriter<W> {
    /// Starts a new archive on `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            zip: ZipWriter::new(writer),
            options: SimpleFileOptions::default().compression_method(CompressionMethod::Deflated),
            buffer: vec![0u8; COPY_BUFFER_SIZE],
            files_added: 0,
            bytes_written: 0,
        }
    }

    /// Copies the file at `path` into the archive under `name`.
    ///
    /// On Unix the file's permission bits are recorded on the member.
    /// Returns the number of uncompressed bytes written.
    pub fn add_file(&mut self, path: &Path, name: &str) -> Result<u64> {
        let mut file = File::open(path)?;

        #[cfg(unix)]
        let options = {
            use std::os::unix::fs::PermissionsExt;
            let mode = file.metadata()?.permissions().mode();
            self.options.unix_permissions(mode)
        };
        #[cfg(not(unix))]
        let options = self.options;

        self.zip.start_file(name, options)?;

        let mut written = 0u64;
        loop {
            let read = file.read(&mut self.buffer)?;
            if read == 0 {
                break;
            }
            self.zip.write_all(&self.buffer[..read])?;
            written += read as u64;
        }

        self.files_added += 1;
        self.bytes_written += written;
        Ok(written)
    }

    /// Number of members written so far.
    pub fn files_added(&self) -> usize {
        self.files_added
    }

    /// Total uncompressed bytes written so far.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Writes the central directory and returns the inner writer.
    pub fn finish(self) -> Result<W> {
        Ok(self.zip.finish()?)
    }
}
