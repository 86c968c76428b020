//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// noteboard - a note board with editable categories
#[derive(Parser, Debug)]
#[command(name = "noteboard", version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to ~/.config/noteboard/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Start from an empty board instead of the sample data
    #[arg(long, global = true)]
    pub empty: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the board
    Show(ShowArgs),

    /// Apply a script of intents to the board, then show it
    Run(RunArgs),

    /// List the category colors
    Colors(ColorsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Arguments for the `run` command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Script file with one intent per line (stdin when omitted or "-")
    pub script: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Show the board after every intent instead of only at the end
    #[arg(long)]
    pub each: bool,
}

/// Arguments for the `colors` command
#[derive(Parser, Debug)]
pub struct ColorsArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_run_with_script_and_flags() {
        let cli = Cli::try_parse_from(["noteboard", "-vv", "run", "ops.txt", "--each", "-f", "json"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Run(args) => {
                assert_eq!(args.script, Some(PathBuf::from("ops.txt")));
                assert!(args.each);
                assert_eq!(args.format, Some(OutputFormat::Json));
            }
            other => panic!("expected run, got {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["noteboard", "show", "--empty", "--config", "c.toml"])
            .unwrap();
        assert!(cli.empty);
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["noteboard", "show", "-f", "yaml"]).is_err());
    }
}
