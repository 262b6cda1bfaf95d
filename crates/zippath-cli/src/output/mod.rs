//! Output formatting module.

mod formatter;
mod human;
mod json;

pub use formatter::OutputFormatter;

use human::HumanFormatter;
use json::JsonFormatter;

/// How a run reports its result on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// The JSON envelope. Printed even with `--quiet`.
    Json,
    /// Styled summary; `verbose` adds exclusion and timing figures.
    Human { verbose: bool },
    /// Nothing on success. Errors still go to stderr.
    Quiet,
}

impl OutputMode {
    pub fn from_flags(json: bool, verbose: bool, quiet: bool) -> Self {
        match (json, quiet) {
            (true, _) => Self::Json,
            (false, true) => Self::Quiet,
            (false, false) => Self::Human { verbose },
        }
    }
}

pub fn create_formatter(mode: OutputMode) -> Box<dyn OutputFormatter> {
    match mode {
        OutputMode::Json => Box::new(JsonFormatter),
        OutputMode::Human { verbose } => Box::new(HumanFormatter::new(verbose, false)),
        OutputMode::Quiet => Box::new(HumanFormatter::new(false, true)),
    }
}
