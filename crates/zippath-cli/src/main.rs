//! Zippath CLI - compress a file or directory into a zip archive.

mod cli;
mod commands;
mod error;
mod logging;
mod output;

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    if let Err(err) = logging::init_logging(cli.verbose, cli.quiet) {
        eprintln!("warning: logging disabled: {err}");
    }
    let mode = output::OutputMode::from_flags(cli.json, cli.verbose, cli.quiet);
    let formatter = output::create_formatter(mode);

    let result = match &cli.command {
        cli::Commands::Zip(args) => commands::zip::execute(args, &*formatter),
        cli::Commands::Run(args) => commands::run::execute(args, &*formatter),
        cli::Commands::Completion(args) => {
            commands::completion::execute(args.shell);
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            formatter.format_error(&err);
            ExitCode::FAILURE
        }
    }
}
