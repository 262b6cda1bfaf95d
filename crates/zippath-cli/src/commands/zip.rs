//! Zip command implementation.

use crate::cli::ZipArgs;
use crate::error::add_source_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use std::path::Path;

pub fn execute(args: &ZipArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let report = add_source_context(
        zippath_core::run_task(args.to_task_options()),
        Path::new(&args.path),
    )?;
    formatter.format_zip_result(&report)
}
