//! Compress a file or directory into a zip archive.
//!
//! `zippath-core` walks a source tree, drops entries matching shell-style
//! exclusion patterns (pruning excluded directories before they are read),
//! writes the rest into a deflate-compressed zip, and can drop a
//! static-resource `.resource-meta.xml` descriptor beside the archive.
//!
//! # Examples
//!
//! ```no_run
//! use zippath_core::TaskOptions;
//! use zippath_core::run_task;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let options = TaskOptions::new("staticresources/app")
//!     .with_exclude("*.map, node_modules")
//!     .with_include_meta(true);
//! let report = run_task(options)?;
//! println!("Wrote {}", report.archive_path.display());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod archive;
pub mod error;
pub mod filters;
pub mod options;
pub mod paths;
pub mod report;
pub mod sidecar;
pub mod walker;

// Re-export main API types
pub use api::run_task;
pub use api::zip_path;
pub use error::Result;
pub use error::ZipPathError;
pub use options::TaskOptions;
pub use options::ZipPathConfig;
pub use report::ZipPathReport;
