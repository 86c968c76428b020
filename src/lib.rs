//! noteboard - a note board with editable categories and colored note cards

pub mod board;
pub mod cli;
pub mod domain;
pub mod store;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use board::Board;
use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_colors, handle_completions, handle_run, handle_show},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;
    let verbose = cli.verbose > 0;
    let mut board = if config.empty(cli.empty) {
        Board::empty()
    } else {
        Board::sample()
    };

    match &cli.command {
        Command::Show(args) => handle_show(args, &board, &config),
        Command::Run(args) => handle_run(args, &mut board, &config, verbose),
        Command::Colors(args) => handle_colors(args, &config),
        Command::Completions(args) => handle_completions(args),
    }
}

/// Sets up stderr logging from the `-v` count; `RUST_LOG` overrides it.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}
