//! Declarative snapshots of the board handed to the front end.
//!
//! Views are rebuilt from scratch on every call; card colors are looked up
//! against the category list as it is right now.

use serde::Serialize;

use crate::board::Board;
use crate::domain::{CardColor, ColorTag, DueDate, NoteId};
use crate::store::{CategoryForm, color_for};

/// Everything needed to draw the board once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub title: String,
    pub sidebar: SidebarView,
    pub notes: Vec<CardView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarView {
    pub categories: Vec<CategoryRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<FormView>,
    /// The "Add Category" control is only offered while no form is open.
    pub show_add_button: bool,
    pub due_dates: Vec<DueDate>,
    pub tags: Vec<TagChip>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRow {
    pub index: usize,
    pub name: String,
    pub color: ColorTag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    Adding,
    Editing,
}

/// The open category form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub mode: FormMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editing_index: Option<usize>,
    pub name: String,
    pub color: ColorTag,
    pub submit_label: &'static str,
    pub palette: Vec<Swatch>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Swatch {
    pub color: ColorTag,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagChip {
    pub label: String,
    pub color: ColorTag,
}

/// A note drawn as a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub category: String,
    pub color: CardColor,
}

impl BoardView {
    pub fn project(board: &Board) -> Self {
        let categories = board.categories().categories();

        let rows = categories
            .iter()
            .enumerate()
            .map(|(index, c)| CategoryRow {
                index,
                name: c.name().to_string(),
                color: c.color(),
            })
            .collect();

        let form = FormView::project(board.categories().form());

        let tags = board
            .tags()
            .iter()
            .map(|t| TagChip {
                label: t.to_string(),
                color: t.color(),
            })
            .collect();

        let notes = board
            .notes()
            .notes()
            .iter()
            .map(|n| CardView {
                id: n.id(),
                title: n.title().to_string(),
                content: n.content().to_string(),
                category: n.category().to_string(),
                color: color_for(categories, n.category()),
            })
            .collect();

        Self {
            title: board.title().to_string(),
            sidebar: SidebarView {
                categories: rows,
                show_add_button: form.is_none(),
                form,
                due_dates: board.due_dates().to_vec(),
                tags,
            },
            notes,
        }
    }
}

impl FormView {
    fn project(form: &CategoryForm) -> Option<Self> {
        let (mode, editing_index, draft) = match form {
            CategoryForm::Idle => return None,
            CategoryForm::Adding(draft) => (FormMode::Adding, None, draft),
            CategoryForm::Editing { index, draft } => (FormMode::Editing, Some(*index), draft),
        };

        let palette = ColorTag::ALL
            .into_iter()
            .map(|color| Swatch {
                color,
                selected: color == draft.color,
            })
            .collect();

        Some(Self {
            mode,
            editing_index,
            name: draft.name.clone(),
            color: draft.color,
            submit_label: match mode {
                FormMode::Adding => "Save",
                FormMode::Editing => "Update",
            },
            palette,
        })
    }
}
