//! Fixed sample data every board starts from.

use crate::domain::{Category, ColorTag, DueDate, MonthDay, Note, NoteId, Tag};

const CATEGORIES: &[(&str, ColorTag)] = &[
    ("YouTube Video Notes", ColorTag::Yellow),
    ("Tutorial / Class Notes", ColorTag::Blue),
    ("Scripts", ColorTag::Green),
    ("Research", ColorTag::Red),
    ("Other Good Content", ColorTag::Purple),
    ("Ideas", ColorTag::Pink),
    ("Personal Journal", ColorTag::Yellow),
];

const NOTES: &[(u32, &str, &str, &str)] = &[
    (
        1,
        "Move AI Looks Sick",
        "This is such a cool app. Here's a comprehensive overview of Move AI and how you can use it as a content creator...",
        "Ideas",
    ),
    (
        2,
        "The mobile version needs work!",
        "The mobile version has a lot of issues but that is okay for now. We are still working on it. We won't stop ever. This...",
        "Research",
    ),
    (
        3,
        "Finish Notes on Cubby YouTube Video",
        "Cubby: A tool for creating searchable transcripts of video content, allowing users to highlight, tag, and download...",
        "YouTube Video Notes",
    ),
];

const DUE_DATES: &[(u32, u32, &str)] = &[
    (8, 1, "Finish Notes on Cubby YouTube Video"),
    (7, 23, "Tell everyone I know about this"),
    (7, 19, "Finish - How to code like a boss"),
];

const TAGS: &[(&str, ColorTag)] = &[
    ("motioncapture", ColorTag::Blue),
    ("learning", ColorTag::Green),
    ("AITools", ColorTag::Yellow),
    ("Fun", ColorTag::Red),
];

pub fn categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .map(|&(name, color)| Category::new(name, color).expect("sample category names are non-empty"))
        .collect()
}

pub fn notes() -> Vec<Note> {
    NOTES
        .iter()
        .map(|&(id, title, content, category)| Note::new(NoteId::new(id), title, content, category))
        .collect()
}

pub fn due_dates() -> Vec<DueDate> {
    DUE_DATES
        .iter()
        .map(|&(month, day, label)| {
            let date = MonthDay::new(month, day).expect("sample due dates are real days");
            DueDate::new(date, label)
        })
        .collect()
}

pub fn tags() -> Vec<Tag> {
    TAGS.iter()
        .map(|&(name, color)| Tag::new(name, color).expect("sample tag names are valid"))
        .collect()
}
