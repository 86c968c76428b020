//! User intents reported by the rendering front end.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::domain::{ColorTag, NoteId, ParseColorError, ParseNoteIdError};

/// A discrete user action.
///
/// The text form is one line per intent:
///
/// ```text
/// add
/// name Ideas
/// color pink
/// commit
/// edit 0
/// cancel
/// delete-category 2
/// delete-note 3
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    AddCategoryRequested,
    EditCategoryRequested(usize),
    CategoryNameChanged(String),
    CategoryColorChosen(ColorTag),
    CommitCategory,
    CancelCategoryEdit,
    DeleteCategory(usize),
    DeleteNote(NoteId),
}

/// Error returned when a line does not describe an intent.
#[derive(Debug, Error)]
pub enum ParseIntentError {
    #[error("empty intent")]
    Empty,

    #[error("unknown intent '{0}'")]
    UnknownCommand(String),

    #[error("'{command}' expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("'{command}' takes no arguments, got '{extra}'")]
    UnexpectedArgument {
        command: &'static str,
        extra: String,
    },

    #[error("invalid category index '{0}'")]
    InvalidIndex(String),

    #[error(transparent)]
    InvalidColor(#[from] ParseColorError),

    #[error(transparent)]
    InvalidNoteId(#[from] ParseNoteIdError),
}

impl Intent {
    /// Returns the keyword that starts the text form of this intent.
    pub fn keyword(&self) -> &'static str {
        match self {
            Intent::AddCategoryRequested => "add",
            Intent::EditCategoryRequested(_) => "edit",
            Intent::CategoryNameChanged(_) => "name",
            Intent::CategoryColorChosen(_) => "color",
            Intent::CommitCategory => "commit",
            Intent::CancelCategoryEdit => "cancel",
            Intent::DeleteCategory(_) => "delete-category",
            Intent::DeleteNote(_) => "delete-note",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = self.keyword();
        match self {
            Intent::EditCategoryRequested(index) | Intent::DeleteCategory(index) => {
                write!(f, "{keyword} {index}")
            }
            Intent::CategoryNameChanged(name) if name.is_empty() => f.write_str(keyword),
            Intent::CategoryNameChanged(name) => write!(f, "{keyword} {name}"),
            Intent::CategoryColorChosen(color) => write!(f, "{keyword} {color}"),
            Intent::DeleteNote(id) => write!(f, "{keyword} {id}"),
            Intent::AddCategoryRequested
            | Intent::CommitCategory
            | Intent::CancelCategoryEdit => f.write_str(keyword),
        }
    }
}

impl FromStr for Intent {
    type Err = ParseIntentError;

    /// Parses one line.
    ///
    /// Everything after `name ` is taken verbatim (including surrounding
    /// spaces), since trimming happens when the draft is committed.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\r', '\n']).trim_start();
        let (command, rest) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line, ""));

        match command {
            "" => Err(ParseIntentError::Empty),
            "add" => no_argument("add", rest).map(|_| Intent::AddCategoryRequested),
            "commit" => no_argument("commit", rest).map(|_| Intent::CommitCategory),
            "cancel" => no_argument("cancel", rest).map(|_| Intent::CancelCategoryEdit),
            "edit" => parse_index("edit", rest).map(Intent::EditCategoryRequested),
            "delete-category" => parse_index("delete-category", rest).map(Intent::DeleteCategory),
            "name" => Ok(Intent::CategoryNameChanged(rest.to_string())),
            "color" => {
                let value = single_argument("color", "a color name", rest)?;
                Ok(Intent::CategoryColorChosen(value.parse()?))
            }
            "delete-note" => {
                let value = single_argument("delete-note", "a note id", rest)?;
                Ok(Intent::DeleteNote(value.parse()?))
            }
            other => Err(ParseIntentError::UnknownCommand(other.to_string())),
        }
    }
}

fn no_argument(command: &'static str, rest: &str) -> Result<(), ParseIntentError> {
    let extra = rest.trim();
    if extra.is_empty() {
        Ok(())
    } else {
        Err(ParseIntentError::UnexpectedArgument {
            command,
            extra: extra.to_string(),
        })
    }
}

fn single_argument<'a>(
    command: &'static str,
    expected: &'static str,
    rest: &'a str,
) -> Result<&'a str, ParseIntentError> {
    let value = rest.trim();
    if value.is_empty() || value.contains(char::is_whitespace) {
        return Err(ParseIntentError::MissingArgument { command, expected });
    }
    Ok(value)
}

fn parse_index(command: &'static str, rest: &str) -> Result<usize, ParseIntentError> {
    let value = single_argument(command, "a category index", rest)?;
    value
        .parse()
        .map_err(|_| ParseIntentError::InvalidIndex(value.to_string()))
}
