//! Modal dialog renderer.
//!
//! Draws a bordered box centered over whatever screen is underneath. The
//! message is word-wrapped to the box width.

use crate::ui::helpers::{center, position_cursor, wrap};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DialogInfo, DialogKind};

const MAX_WIDTH: usize = 60;

/// Renders `dialog` centered in a `rows` × `cols` pane.
pub fn render_dialog(dialog: &DialogInfo, theme: &Theme, rows: usize, cols: usize) {
    let width = cols.saturating_sub(4).min(MAX_WIDTH).max(10);
    let inner = width - 4;
    let message = wrap(&dialog.message, inner);

    // border, title, blank, message..., blank, hint, border
    let height = message.len() + 6;
    let top = rows.saturating_sub(height) / 2 + 1;
    let left = cols.saturating_sub(width) / 2 + 1;

    let accent = match dialog.kind {
        DialogKind::Confirm => &theme.colors.warning_fg,
        DialogKind::Busy => &theme.colors.text_dim,
        DialogKind::Success => &theme.colors.success_fg,
        DialogKind::Failure => &theme.colors.error_fg,
    };
    let border = Theme::fg(&theme.colors.border);

    let mut lines = Vec::with_capacity(height - 2);
    lines.push(format!("{}{}{}", Theme::bold(), Theme::fg(accent), center(&dialog.title, inner)));
    lines.push(" ".repeat(inner));
    lines.extend(
        message
            .iter()
            .map(|line| format!("{}{}", Theme::fg(&theme.colors.text_normal), center(line, inner))),
    );
    lines.push(" ".repeat(inner));
    lines.push(format!("{}{}", Theme::fg(&theme.colors.text_dim), center(&dialog.hint, inner)));

    position_cursor(top, left);
    print!("{border}┌{}┐{}", "─".repeat(width - 2), Theme::reset());
    for (offset, line) in lines.iter().enumerate() {
        position_cursor(top + 1 + offset, left);
        print!("{border}│{} {line} {}{border}│{}", Theme::reset(), Theme::reset(), Theme::reset());
    }
    position_cursor(top + height - 1, left);
    print!("{border}└{}┘{}", "─".repeat(width - 2), Theme::reset());
}
