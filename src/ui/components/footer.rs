//! Footer component renderer.
//!
//! This module renders the footer help bar with centered keybinding hints.

use crate::ui::helpers::{center, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help bar at the specified row.
///
/// Hints longer than the terminal width are cut so the layout stays intact on
/// narrow panes.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", center(&footer.keybindings, cols));
    print!("{}", Theme::reset());
    row + 1
}
