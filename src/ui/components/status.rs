//! Load status line renderer.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{StatusKind, StatusLine};

/// Renders the loading or error line, or a blank line when there is none.
pub fn render_status(row: usize, status: Option<&StatusLine>, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    match status {
        Some(line) => {
            let color = match line.kind {
                StatusKind::Loading => &theme.colors.warning_fg,
                StatusKind::Error => &theme.colors.error_fg,
            };
            print!("{}", Theme::fg(color));
            print!("{}", fit(&line.message, cols));
            print!("{}", Theme::reset());
        }
        None => print!("{}", " ".repeat(cols)),
    }
    row + 1
}
