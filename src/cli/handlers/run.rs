//! Run command handler: replay an intent script against the board.

use anyhow::{Context, Result};
use log::info;
use std::io::{self, Read, Write};
use std::path::Path;

use super::{ConsoleReporter, write_board};
use crate::board::{Board, Script};
use crate::cli::RunArgs;
use crate::cli::config::Config;
use crate::cli::output::{Output, OutputFormat, StepSnapshot};

pub fn handle_run(args: &RunArgs, board: &mut Board, config: &Config, verbose: bool) -> Result<()> {
    let format = config.format(args.format);
    let (source, text) = read_script(args.script.as_deref())?;
    let script =
        Script::parse(&text).with_context(|| format!("failed to parse script {}", source))?;
    info!("replaying {} intent(s) from {}", script.len(), source);

    let mut reporter = ConsoleReporter::new(verbose, args.each);
    board.replay(&script, &mut reporter);

    let mut out = io::stdout().lock();
    if args.each {
        write_snapshots(&mut out, &reporter.take_snapshots(), format)
    } else {
        write_board(&mut out, &board.view(), format)
    }
}

/// Reads script text from a file, or from stdin when `path` is `None` or `-`.
///
/// Returns a display name for the source along with its contents.
pub fn read_script(path: Option<&Path>) -> Result<(String, String)> {
    match path {
        Some(path) if path != Path::new("-") => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read script: {}", path.display()))?;
            Ok((path.display().to_string(), text))
        }
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read script from stdin")?;
            Ok(("<stdin>".to_string(), text))
        }
    }
}

pub(crate) fn write_snapshots(
    out: &mut impl Write,
    snapshots: &[StepSnapshot],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Human => {
            for (position, snapshot) in snapshots.iter().enumerate() {
                if position > 0 {
                    writeln!(out)?;
                }
                match &snapshot.ignored {
                    Some(reason) => writeln!(
                        out,
                        "== line {}: {} (ignored: {}) ==",
                        snapshot.line, snapshot.intent, reason
                    )?,
                    None => writeln!(out, "== line {}: {} ==", snapshot.line, snapshot.intent)?,
                }
                write_board(out, &snapshot.view, format)?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&Output::new(snapshots))?)?;
        }
    }
    Ok(())
}
