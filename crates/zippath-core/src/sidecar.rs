//! Static-resource metadata sidecar.
//!
//! When a zip is deployed as a static resource, the consuming platform
//! expects a `<name>.resource-meta.xml` descriptor beside it. The content is
//! fixed: public cache control, `application/zip` content type.

use crate::Result;
use std::path::Path;
use std::path::PathBuf;

/// Extension that replaces the archive's own extension.
pub const SIDECAR_EXTENSION: &str = "resource-meta.xml";

/// The descriptor, byte for byte. No trailing newline.
pub const SIDECAR_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<StaticResource xmlns="http://soap.sforce.com/2006/04/metadata">
    <cacheControl>Public</cacheControl>
    <contentType>application/zip</contentType>
</StaticResource>"#;

/// Sidecar path for an archive: its extension replaced by
/// [`SIDECAR_EXTENSION`].
///
/// # Examples
///
/// ```
/// use zippath_core::sidecar::sidecar_path;
/// use std::path::Path;
///
/// assert_eq!(
///     sidecar_path(Path::new("/out/site.zip")),
///     Path::new("/out/site.resource-meta.xml")
/// );
/// ```
#[must_use]
pub fn sidecar_path(archive: &Path) -> PathBuf {
    archive.with_extension(SIDECAR_EXTENSION)
}

/// Writes the descriptor next to `archive`, overwriting any existing file.
///
/// Returns the path written.
pub fn write_sidecar(archive: &Path) -> Result<PathBuf> {
    let path = sidecar_path(archive);
    std::fs::write(&path, SIDECAR_XML)?;
    Ok(path)
}
