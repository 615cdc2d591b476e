//! Empty state component renderer.

use crate::ui::helpers::{center, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the two-line empty state message, starting a few rows below `row`.
///
/// Shown when a load succeeded but returned no employees.
///
/// ```text
/// [3 blank lines]
/// [padding] No employees found. [padding]
/// [padding] Press a to add a new employee [padding]
/// ```
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let message_row = row + 3;

    position_cursor(message_row, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", center(&empty.message, cols));
    print!("{}", Theme::reset());

    position_cursor(message_row + 1, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", center(&empty.subtitle, cols));
    print!("{}", Theme::reset());
    message_row + 2
}
