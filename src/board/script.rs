//! Intent scripts: one intent per line, with comments and blank lines.

use thiserror::Error;

use crate::board::{Intent, ParseIntentError};

/// An intent together with the 1-based line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub line: usize,
    pub intent: Intent,
}

/// Error returned when a script line cannot be parsed.
#[derive(Debug, Error)]
#[error("line {line}: {source}")]
pub struct ScriptError {
    pub line: usize,
    #[source]
    pub source: ParseIntentError,
}

/// A parsed sequence of intents.
///
/// Parsing is all-or-nothing: a single bad line rejects the whole script, so
/// a board is never left half-driven by a malformed file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    steps: Vec<Step>,
}

impl Script {
    /// Parses script text.
    ///
    /// Blank lines and lines whose first non-blank character is `#` are
    /// skipped.
    pub fn parse(text: &str) -> Result<Self, ScriptError> {
        let mut steps = Vec::new();
        for (offset, raw) in text.lines().enumerate() {
            let line = offset + 1;
            let content = raw.trim_start();
            if content.trim_end().is_empty() || content.starts_with('#') {
                continue;
            }
            let intent = raw
                .parse()
                .map_err(|source| ScriptError { line, source })?;
            steps.push(Step { line, intent });
        }
        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl FromIterator<Intent> for Script {
    fn from_iter<I: IntoIterator<Item = Intent>>(iter: I) -> Self {
        let steps = iter
            .into_iter()
            .enumerate()
            .map(|(offset, intent)| Step {
                line: offset + 1,
                intent,
            })
            .collect();
        Self { steps }
    }
}
