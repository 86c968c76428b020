//! Category list with a single-slot add/edit form.

use log::debug;

use crate::domain::{Category, ColorTag, EmptyCategoryName};
use crate::store::{Ignored, Outcome};

/// Uncommitted category fields held while the form is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub color: ColorTag,
}

impl Draft {
    fn from_category(category: &Category) -> Self {
        Self {
            name: category.name().to_string(),
            color: category.color(),
        }
    }
}

/// State of the category form.
///
/// A draft only exists while the form is open, so "adding and editing at the
/// same time" cannot be expressed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryForm {
    /// No form shown; the "Add" control is visible.
    #[default]
    Idle,
    /// Composing a new category that is not yet in the list.
    Adding(Draft),
    /// Rewriting the entry at `index`. The entry is untouched until commit.
    Editing { index: usize, draft: Draft },
}

impl CategoryForm {
    pub fn is_idle(&self) -> bool {
        matches!(self, CategoryForm::Idle)
    }

    pub fn draft(&self) -> Option<&Draft> {
        match self {
            CategoryForm::Idle => None,
            CategoryForm::Adding(draft) | CategoryForm::Editing { draft, .. } => Some(draft),
        }
    }

    fn draft_mut(&mut self) -> Option<&mut Draft> {
        match self {
            CategoryForm::Idle => None,
            CategoryForm::Adding(draft) | CategoryForm::Editing { draft, .. } => Some(draft),
        }
    }
}

/// Ordered category list plus the add/edit form.
///
/// The list only changes through [`commit`](Self::commit) and
/// [`delete`](Self::delete). Deleting is refused while the form is open, so an
/// `Editing` index always points at the entry it was opened on.
#[derive(Debug, Clone, Default)]
pub struct CategoryStore {
    categories: Vec<Category>,
    form: CategoryForm,
}

impl CategoryStore {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories,
            form: CategoryForm::Idle,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn form(&self) -> &CategoryForm {
        &self.form
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Returns the first category with exactly this name.
    pub fn find(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name() == name)
    }

    /// Opens the form with an empty draft in the default color.
    pub fn request_add(&mut self) -> Outcome {
        if !self.form.is_idle() {
            return Ignored::DraftOpen.into();
        }
        debug!("category form opened for add");
        self.form = CategoryForm::Adding(Draft::default());
        Outcome::Applied
    }

    /// Opens the form on the entry at `index`, copying its current values.
    pub fn request_edit(&mut self, index: usize) -> Outcome {
        if !self.form.is_idle() {
            return Ignored::DraftOpen.into();
        }
        let Some(category) = self.categories.get(index) else {
            return self.out_of_range(index);
        };
        debug!("category form opened for edit of {index} ({})", category.name());
        self.form = CategoryForm::Editing {
            index,
            draft: Draft::from_category(category),
        };
        Outcome::Applied
    }

    /// Replaces the draft name. The text is kept verbatim until commit.
    pub fn set_name(&mut self, name: impl Into<String>) -> Outcome {
        match self.form.draft_mut() {
            Some(draft) => {
                draft.name = name.into();
                Outcome::Applied
            }
            None => Ignored::NoDraft.into(),
        }
    }

    pub fn choose_color(&mut self, color: ColorTag) -> Outcome {
        match self.form.draft_mut() {
            Some(draft) => {
                draft.color = color;
                Outcome::Applied
            }
            None => Ignored::NoDraft.into(),
        }
    }

    /// Writes the draft into the list and closes the form.
    ///
    /// A draft whose name trims to nothing is refused and the form stays open
    /// with the draft untouched.
    pub fn commit(&mut self) -> Outcome {
        let (target, draft) = match &self.form {
            CategoryForm::Idle => return Ignored::NoDraft.into(),
            CategoryForm::Adding(draft) => (None, draft),
            CategoryForm::Editing { index, draft } => (Some(*index), draft),
        };

        let category = match Category::new(&draft.name, draft.color) {
            Ok(category) => category,
            Err(EmptyCategoryName) => return Ignored::EmptyName.into(),
        };

        match target {
            None => {
                debug!("category added: {category}");
                self.categories.push(category);
            }
            Some(index) => {
                debug!("category {index} updated: {category}");
                self.categories[index] = category;
            }
        }
        self.form = CategoryForm::Idle;
        Outcome::Applied
    }

    /// Discards the draft without touching the list.
    pub fn cancel(&mut self) -> Outcome {
        if self.form.is_idle() {
            return Ignored::NoDraft.into();
        }
        debug!("category form cancelled");
        self.form = CategoryForm::Idle;
        Outcome::Applied
    }

    /// Removes the entry at `index`, shifting later entries down.
    pub fn delete(&mut self, index: usize) -> Outcome {
        if !self.form.is_idle() {
            return Ignored::DraftOpen.into();
        }
        if index >= self.categories.len() {
            return self.out_of_range(index);
        }
        let removed = self.categories.remove(index);
        debug!("category {index} deleted: {removed}");
        Outcome::Applied
    }

    fn out_of_range(&self, index: usize) -> Outcome {
        Ignored::IndexOutOfRange {
            index,
            len: self.categories.len(),
        }
        .into()
    }
}
