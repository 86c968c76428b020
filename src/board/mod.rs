//! The board session: both stores, the static sidebar, and intent dispatch.

mod intent;
pub mod sample;
mod script;
mod view;

pub use intent::{Intent, ParseIntentError};
pub use script::{Script, ScriptError, Step};
pub use view::{
    BoardView, CardView, CategoryRow, FormMode, FormView, SidebarView, Swatch, TagChip,
};

use log::debug;

use crate::domain::{CardColor, Category, DueDate, Note, Tag};
use crate::store::{CategoryStore, NoteStore, Outcome, color_for};

/// Heading shown at the top of the sidebar.
pub const LIBRARY_TITLE: &str = "My Library";

/// Receives a callback for each step while a script is replayed.
pub trait StepReporter {
    /// Called after `step` was applied with the given outcome.
    fn on_step(&mut self, step: &Step, outcome: &Outcome, board: &Board);

    /// Called once after the last step.
    fn on_complete(&mut self, applied: usize, ignored: usize);
}

/// Reporter that ignores everything.
pub struct NullReporter;

impl StepReporter for NullReporter {
    fn on_step(&mut self, _step: &Step, _outcome: &Outcome, _board: &Board) {}
    fn on_complete(&mut self, _applied: usize, _ignored: usize) {}
}

/// A single session's board.
///
/// Owns the category and note stores exclusively. The front end reads from it
/// through [`view`](Self::view) and writes to it only through
/// [`apply`](Self::apply).
#[derive(Debug, Clone)]
pub struct Board {
    title: String,
    categories: CategoryStore,
    notes: NoteStore,
    due_dates: Vec<DueDate>,
    tags: Vec<Tag>,
}

impl Board {
    /// Creates a board with the given categories and notes and an empty
    /// sidebar.
    pub fn new(categories: Vec<Category>, notes: Vec<Note>) -> Self {
        Self {
            title: LIBRARY_TITLE.to_string(),
            categories: CategoryStore::new(categories),
            notes: NoteStore::new(notes),
            due_dates: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Creates a board loaded with the fixed sample data.
    pub fn sample() -> Self {
        Self::new(sample::categories(), sample::notes())
            .with_due_dates(sample::due_dates())
            .with_tags(sample::tags())
    }

    /// Creates a board with nothing on it.
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    pub fn with_due_dates(mut self, due_dates: Vec<DueDate>) -> Self {
        self.due_dates = due_dates;
        self
    }

    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn categories(&self) -> &CategoryStore {
        &self.categories
    }

    pub fn notes(&self) -> &NoteStore {
        &self.notes
    }

    pub fn due_dates(&self) -> &[DueDate] {
        &self.due_dates
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Resolves the card color for a category name against the current list.
    pub fn color_for(&self, category: &str) -> CardColor {
        color_for(self.categories.categories(), category)
    }

    /// Applies one intent.
    pub fn apply(&mut self, intent: Intent) -> Outcome {
        let outcome = match intent {
            Intent::AddCategoryRequested => self.categories.request_add(),
            Intent::EditCategoryRequested(index) => self.categories.request_edit(index),
            Intent::CategoryNameChanged(name) => self.categories.set_name(name),
            Intent::CategoryColorChosen(color) => self.categories.choose_color(color),
            Intent::CommitCategory => self.categories.commit(),
            Intent::CancelCategoryEdit => self.categories.cancel(),
            Intent::DeleteCategory(index) => self.categories.delete(index),
            Intent::DeleteNote(id) => self.notes.delete(id),
        };
        if let Some(reason) = outcome.ignored() {
            debug!("intent ignored: {reason}");
        }
        outcome
    }

    /// Applies every step of a script in order.
    ///
    /// Returns the number of applied and ignored steps.
    pub fn replay(&mut self, script: &Script, reporter: &mut impl StepReporter) -> (usize, usize) {
        let mut applied = 0;
        let mut ignored = 0;
        for step in script.steps() {
            let outcome = self.apply(step.intent.clone());
            if outcome.is_applied() {
                applied += 1;
            } else {
                ignored += 1;
            }
            reporter.on_step(step, &outcome, self);
        }
        reporter.on_complete(applied, ignored);
        (applied, ignored)
    }

    /// Projects the current state into a view snapshot.
    pub fn view(&self) -> BoardView {
        BoardView::project(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::sample()
    }
}
