//! Note: a card on the board that refers to a category by name.

use serde::Serialize;

use crate::domain::NoteId;

/// A note card.
///
/// `category` is a weak reference: it holds a category name used only for
/// lookup. It may name a category that has since been renamed or deleted, in
/// which case the card is drawn in the neutral color.
///
/// # Examples
///
/// ```
/// use noteboard::domain::{Note, NoteId};
///
/// let note = Note::new(NoteId::new(1), "Move AI", "Motion capture app", "Ideas");
/// assert_eq!(note.category(), "Ideas");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    id: NoteId,
    title: String,
    content: String,
    category: String,
}

impl Note {
    pub fn new(
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            category: category.into(),
        }
    }

    pub fn id(&self) -> NoteId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the name of the category this note refers to.
    pub fn category(&self) -> &str {
        &self.category
    }
}
