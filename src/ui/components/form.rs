//! Form component renderer.
//!
//! Each field takes three rows: its label, its value and its inline error.
//! The focused field's label is highlighted and its value shows a cursor.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FieldRow, FormBody};

const INDENT: usize = 4;

/// Renders all fields followed by the submit button, returning the next free row.
pub fn render_form(row: usize, body: &FormBody, theme: &Theme, cols: usize) -> usize {
    let width = cols.saturating_sub(INDENT * 2).max(1);
    let mut current_row = row;
    for field in &body.fields {
        current_row = render_field(current_row, field, theme, width);
    }
    render_submit(current_row + 1, body, theme, width)
}

fn render_field(row: usize, field: &FieldRow, theme: &Theme, width: usize) -> usize {
    position_cursor(row, INDENT + 1);
    if field.is_focused {
        print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.focus_fg));
        print!("{}", fit(&format!("> {}", field.label), width));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{}", fit(&format!("  {}", field.label), width));
    }
    print!("{}", Theme::reset());

    position_cursor(row + 1, INDENT + 1);
    let cursor = if field.is_focused { "_" } else { "" };
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{}", fit(&format!("  {}{cursor}", field.value), width));
    print!("{}", Theme::reset());

    position_cursor(row + 2, INDENT + 1);
    match &field.error {
        Some(error) => {
            print!("{}", Theme::fg(&theme.colors.error_fg));
            print!("{}", fit(&format!("  {error}"), width));
            print!("{}", Theme::reset());
        }
        None => print!("{}", " ".repeat(width)),
    }
    row + 3
}

fn render_submit(row: usize, body: &FormBody, theme: &Theme, width: usize) -> usize {
    position_cursor(row, INDENT + 1);
    if body.submit_enabled {
        print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    }
    print!(" {} ", body.submit_label);
    print!("{}", Theme::reset());
    print!("{}", " ".repeat(width.saturating_sub(body.submit_label.chars().count() + 2)));
    row + 1
}
