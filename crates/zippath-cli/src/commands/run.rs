//! Run command: executes the task from a JSON options record, the way a host
//! framework would hand it over.

use crate::cli::RunArgs;
use crate::error::add_source_context;
use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;
use std::io::Read;
use std::path::Path;
use tracing::debug;
use zippath_core::TaskOptions;

pub fn execute(args: &RunArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let json = read_options(&args.options_file)?;
    let options = add_source_context(TaskOptions::from_json(&json), &args.options_file)?;
    debug!(file = %args.options_file.display(), ?options, "loaded task options");

    let source = options.path.clone().unwrap_or_default();
    let report = add_source_context(zippath_core::run_task(options), Path::new(&source))?;
    formatter.format_zip_result(&report)
}

fn read_options(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut json = String::new();
        std::io::stdin()
            .read_to_string(&mut json)
            .context("failed to read options from stdin")?;
        Ok(json)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read options file '{}'", path.display()))
    }
}
