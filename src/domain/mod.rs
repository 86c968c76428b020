//! Core types: Category, ColorTag, Note, NoteId, Tag, DueDate

mod category;
mod color;
mod due_date;
mod note;
mod note_id;
mod tag;

pub use category::{Category, EmptyCategoryName};
pub use color::{CardColor, ColorTag, ParseColorError};
pub use due_date::{DueDate, MonthDay, ParseMonthDayError};
pub use note::Note;
pub use note_id::{NoteId, ParseNoteIdError};
pub use tag::{ParseTagError, Tag};
