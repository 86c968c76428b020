//! In-memory stores owning the board's categories and notes.

mod category_store;
mod note_store;
mod outcome;

pub use category_store::{CategoryForm, CategoryStore, Draft};
pub use note_store::{NoteStore, color_for};
pub use outcome::{Ignored, Outcome};
