//! Subcommand implementations.

pub mod completion;
pub mod run;
pub mod zip;
