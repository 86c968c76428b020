//! Result of applying an operation to a store.

use thiserror::Error;

use crate::domain::NoteId;

/// What happened when an operation was applied.
///
/// Rejections are not errors: the store is left exactly as it was and the
/// caller is free to drop the reason on the floor.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The store changed (or a draft field was updated).
    Applied,
    /// The operation was a no-op.
    Ignored(Ignored),
}

/// Why an operation was a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Ignored {
    #[error("category name is empty")]
    EmptyName,

    #[error("no category form is open")]
    NoDraft,

    #[error("a category form is already open")]
    DraftOpen,

    #[error("category index {index} is out of range ({len} categories)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("no note with id {0}")]
    UnknownNote(NoteId),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }

    /// Returns the rejection reason, if the operation was a no-op.
    pub fn ignored(&self) -> Option<&Ignored> {
        match self {
            Outcome::Applied => None,
            Outcome::Ignored(reason) => Some(reason),
        }
    }
}

impl From<Ignored> for Outcome {
    fn from(reason: Ignored) -> Self {
        Outcome::Ignored(reason)
    }
}
