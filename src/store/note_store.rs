//! Note list and category color lookup.

use log::debug;

use crate::domain::{CardColor, Category, Note, NoteId};
use crate::store::{Ignored, Outcome};

/// Resolves the card color for a category name.
///
/// Returns the color of the first category whose name is exactly `name`, or
/// the neutral color when none matches. Call this per render: a rename or
/// delete must show up immediately.
pub fn color_for(categories: &[Category], name: &str) -> CardColor {
    categories
        .iter()
        .find(|c| c.name() == name)
        .map_or(CardColor::Neutral, |c| CardColor::Tagged(c.color()))
}

/// Ordered list of note cards.
#[derive(Debug, Clone, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id() == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Removes the note with this id, keeping the order of the rest.
    pub fn delete(&mut self, id: NoteId) -> Outcome {
        let Some(position) = self.notes.iter().position(|n| n.id() == id) else {
            return Ignored::UnknownNote(id).into();
        };
        let removed = self.notes.remove(position);
        debug!("note {} deleted: {}", removed.id(), removed.title());
        Outcome::Applied
    }
}
