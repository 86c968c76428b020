//! Show command handler and the human-readable board layout.

use anyhow::Result;
use std::io::{self, Write};

use super::truncate_str;
use crate::board::{Board, BoardView, FormMode, FormView};
use crate::cli::ShowArgs;
use crate::cli::config::Config;
use crate::cli::output::{Output, OutputFormat};

const NAME_WIDTH: usize = 20;
const TITLE_WIDTH: usize = 40;
const CONTENT_WIDTH: usize = 72;

pub fn handle_show(args: &ShowArgs, board: &Board, config: &Config) -> Result<()> {
    let format = config.format(args.format);
    let mut out = io::stdout().lock();
    write_board(&mut out, &board.view(), format)
}

/// Writes one board snapshot in the given format.
pub fn write_board(out: &mut impl Write, view: &BoardView, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => write_human(out, view)?,
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&Output::new(view))?)?;
        }
    }
    Ok(())
}

fn write_human(out: &mut impl Write, view: &BoardView) -> io::Result<()> {
    let sidebar = &view.sidebar;

    writeln!(out, "{}", view.title)?;
    writeln!(out)?;

    // Categories
    writeln!(out, "Categories")?;
    if sidebar.categories.is_empty() {
        writeln!(out, "  No categories.")?;
    }
    for row in &sidebar.categories {
        writeln!(
            out,
            "  {:>2}  {:<w$}  [{}]",
            row.index,
            truncate_str(&row.name, NAME_WIDTH),
            row.color,
            w = NAME_WIDTH
        )?;
    }
    if let Some(form) = &sidebar.form {
        write_form(out, form)?;
    }
    if sidebar.show_add_button {
        writeln!(out, "  + Add Category")?;
    }
    writeln!(out)?;

    // Upcoming Due Dates
    writeln!(out, "Upcoming Due Dates")?;
    if sidebar.due_dates.is_empty() {
        writeln!(out, "  Nothing due.")?;
    }
    for due in &sidebar.due_dates {
        writeln!(out, "  {}", due)?;
    }
    writeln!(out)?;

    // Tags
    writeln!(out, "Tags")?;
    if sidebar.tags.is_empty() {
        writeln!(out, "  No tags.")?;
    } else {
        let chips: Vec<String> = sidebar
            .tags
            .iter()
            .map(|t| format!("{} [{}]", t.label, t.color))
            .collect();
        writeln!(out, "  {}", chips.join("  "))?;
    }
    writeln!(out)?;

    // Notes
    writeln!(out, "Notes")?;
    if view.notes.is_empty() {
        writeln!(out, "No notes.")?;
        return Ok(());
    }
    writeln!(
        out,
        "{:<4}  {:<6}  {:<w$}  {}",
        "ID",
        "Color",
        "Category",
        "Title",
        w = NAME_WIDTH
    )?;
    writeln!(
        out,
        "{:<4}  {:<6}  {:<w$}  {}",
        "----",
        "------",
        "-".repeat(NAME_WIDTH),
        "-".repeat(TITLE_WIDTH),
        w = NAME_WIDTH
    )?;
    for card in &view.notes {
        writeln!(
            out,
            "{:<4}  {:<6}  {:<w$}  {}",
            card.id,
            card.color,
            truncate_str(&card.category, NAME_WIDTH),
            truncate_str(&card.title, TITLE_WIDTH),
            w = NAME_WIDTH
        )?;
        if !card.content.is_empty() {
            writeln!(out, "      {}", truncate_str(&card.content, CONTENT_WIDTH))?;
        }
    }
    writeln!(out)?;
    writeln!(out, "{} note(s)", view.notes.len())?;
    Ok(())
}

fn write_form(out: &mut impl Write, form: &FormView) -> io::Result<()> {
    match (form.mode, form.editing_index) {
        (FormMode::Editing, Some(index)) => writeln!(out, "  Editing category {}", index)?,
        _ => writeln!(out, "  New category")?,
    }
    writeln!(out, "    name:  \"{}\"", form.name)?;
    let palette: Vec<String> = form
        .palette
        .iter()
        .map(|s| {
            if s.selected {
                format!("[{}]", s.color)
            } else {
                s.color.to_string()
            }
        })
        .collect();
    writeln!(out, "    color: {}", palette.join(" "))?;
    writeln!(out, "    [{}] [Cancel]", form.submit_label)
}
