//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use std::path::PathBuf;
use zippath_core::TaskOptions;
use zippath_core::options::FlagArg;
use zippath_core::options::ListArg;

#[derive(Parser)]
#[command(name = "zippath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compress a file or directory into a zip archive
    Zip(ZipArgs),
    /// Run the task from a JSON options record
    Run(RunArgs),
    /// Generate shell completions
    Completion(CompletionArgs),
}

#[derive(clap::Args)]
pub struct ZipArgs {
    /// File or directory to compress
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Output zip file path (default: PATH with .zip)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<String>,

    /// Exclude pattern (glob; comma-separated, can be repeated)
    #[arg(long = "exclude", short = 'x', value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Write a .resource-meta.xml next to the archive (true/1/yes)
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub include_meta: Option<String>,
}

impl ZipArgs {
    /// Builds the options record a host would hand over.
    pub fn to_task_options(&self) -> TaskOptions {
        let exclude = self
            .exclude
            .iter()
            .flat_map(|value| ListArg::Delimited(value.clone()).into_vec())
            .collect::<Vec<_>>();

        TaskOptions {
            path: Some(self.path.clone()),
            output: self.output.clone(),
            exclude: (!exclude.is_empty()).then_some(ListArg::List(exclude)),
            include_meta: self.include_meta.clone().map(FlagArg::Text),
        }
    }
}

#[derive(clap::Args)]
pub struct RunArgs {
    /// JSON file with path/output/exclude/include_meta ('-' reads stdin)
    #[arg(value_name = "OPTIONS_FILE")]
    pub options_file: PathBuf,
}

#[derive(clap::Args)]
pub struct CompletionArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse_zip(args: &[&str]) -> ZipArgs {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Zip(args) => args,
            _ => panic!("expected zip subcommand"),
        }
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_zip_args_minimal() {
        let args = parse_zip(&["zippath", "zip", "site"]);
        let options = args.to_task_options();
        assert_eq!(options, TaskOptions::new("site"));
    }

    #[test]
    fn test_zip_args_exclude_repeated_and_delimited() {
        let args = parse_zip(&["zippath", "zip", "site", "-x", "*.map,build", "-x", "cache"]);
        let config = args.to_task_options().resolve().unwrap();
        assert_eq!(config.exclude_patterns, vec!["*.map", "build", "cache"]);
    }

    #[test]
    fn test_zip_args_include_meta_forms() {
        let bare = parse_zip(&["zippath", "zip", "site", "--include-meta"]);
        assert!(bare.to_task_options().resolve().unwrap().include_meta);

        let yes = parse_zip(&["zippath", "zip", "site", "--include-meta=YES"]);
        assert!(yes.to_task_options().resolve().unwrap().include_meta);

        let no = parse_zip(&["zippath", "zip", "site", "--include-meta=no"]);
        assert!(!no.to_task_options().resolve().unwrap().include_meta);

        let absent = parse_zip(&["zippath", "zip", "site"]);
        assert!(!absent.to_task_options().resolve().unwrap().include_meta);
    }

    #[test]
    fn test_zip_args_output() {
        let args = parse_zip(&["zippath", "zip", "site", "-o", "out/site.zip"]);
        assert_eq!(args.output.as_deref(), Some("out/site.zip"));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["zippath", "-q", "-v", "zip", "site"]).is_err());
    }
}
