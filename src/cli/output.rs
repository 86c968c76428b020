//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::board::BoardView;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// The board after one script step, for `run --each`.
#[derive(Debug, Serialize)]
pub struct StepSnapshot {
    pub line: usize,
    pub intent: String,
    pub applied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignored: Option<String>,
    pub view: BoardView,
}

/// One entry of the color listing.
#[derive(Debug, Serialize)]
pub struct ColorListing {
    pub name: &'static str,
    pub selectable: bool,
}
