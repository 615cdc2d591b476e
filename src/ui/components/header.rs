//! Header component renderer.
//!
//! Renders the title bar centered across the full width, with an optional dim
//! subtitle line below it.

use crate::ui::helpers::{center, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header at `row` and returns the next free row.
///
/// # Layout
///
/// ```text
/// [padding] Employee Directory [padding]
/// [padding] Employees (3) · refreshed just now [padding]
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", center(&header.title, cols));
    print!("{}", Theme::reset());

    let Some(subtitle) = &header.subtitle else {
        return row + 1;
    };

    position_cursor(row + 1, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", center(subtitle, cols));
    print!("{}", Theme::reset());
    row + 2
}
