//! Command handlers for the CLI.

mod colors;
mod completions;
mod run;
mod show;


use crate::board::{Board, Step, StepReporter};
use crate::cli::output::StepSnapshot;
use crate::store::Outcome;

// Re-export public items
pub use colors::handle_colors;
pub use completions::handle_completions;
pub use run::{handle_run, read_script};
pub use show::{handle_show, write_board};

// Re-export for tests
#[cfg(test)]
pub(crate) use colors::write_colors;
#[cfg(test)]
pub(crate) use run::write_snapshots;

// ===========================================
// Shared Utilities
// ===========================================

/// Step reporter for `run`: reports ignored intents on stderr when verbose
/// and optionally keeps a snapshot of the board after every step.
pub(crate) struct ConsoleReporter {
    verbose: bool,
    snapshots: Option<Vec<StepSnapshot>>,
}

impl ConsoleReporter {
    pub(crate) fn new(verbose: bool, keep_snapshots: bool) -> Self {
        Self {
            verbose,
            snapshots: keep_snapshots.then(Vec::new),
        }
    }

    pub(crate) fn take_snapshots(&mut self) -> Vec<StepSnapshot> {
        self.snapshots.take().unwrap_or_default()
    }
}

impl StepReporter for ConsoleReporter {
    fn on_step(&mut self, step: &Step, outcome: &Outcome, board: &Board) {
        let ignored = outcome.ignored().map(ToString::to_string);
        if self.verbose {
            if let Some(reason) = &ignored {
                eprintln!("ignored line {}: {}", step.line, reason);
            }
        }
        if let Some(snapshots) = &mut self.snapshots {
            snapshots.push(StepSnapshot {
                line: step.line,
                intent: step.intent.to_string(),
                applied: outcome.is_applied(),
                ignored,
                view: board.view(),
            });
        }
    }

    fn on_complete(&mut self, applied: usize, ignored: usize) {
        if self.verbose {
            eprintln!("Applied {} intent(s), ignored {}", applied, ignored);
        }
    }
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
