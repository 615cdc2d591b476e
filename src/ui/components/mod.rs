//! Composable UI component renderers.
//!
//! Each component renders one part of the interface at a given row and returns
//! the next free row, so screens are assembled top to bottom.
//!
//! # Components
//!
//! - [`header`]: Title bar and subtitle
//! - [`footer`]: Keybinding hints
//! - [`status`]: Loading and error line
//! - [`table`]: Employee list with columns (NAME, EMAIL, DEPARTMENT, SALARY, AGE)
//! - [`empty`]: Empty state message for no employees
//! - [`form`]: Labelled inputs with inline errors
//! - [`dialog`]: Modal box drawn over a screen
//!
//! # Layouts
//!
//! - [`render_list_screen`]: Header + Status + Table + Footer
//! - [`render_form_screen`]: Header + Form + Footer

mod dialog;
mod empty;
mod footer;
mod form;
mod header;
mod status;
mod table;

pub use dialog::render_dialog;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FooterInfo, FormBody, HeaderInfo, ListBody};

use empty::render_empty_state;
use footer::render_footer;
use form::render_form;
use header::render_header;
use status::render_status;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal rule at `row` and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

fn render_chrome_bottom(footer: &FooterInfo, theme: &Theme, rows: usize, cols: usize) {
    let footer_row = rows.saturating_sub(1).max(1);
    render_border(footer_row.saturating_sub(1).max(1), &theme.colors.border, cols);
    render_footer(footer_row, footer, theme, cols);
}

/// Renders the employee list.
///
/// ```text
/// [blank line]
/// [Header + subtitle]
/// [Border]
/// [Status line]
/// [Table headings]
/// [Table rows | empty state]
/// [Border]
/// [Footer]
/// ```
pub fn render_list_screen(
    header: &HeaderInfo,
    body: &ListBody,
    footer: &FooterInfo,
    theme: &Theme,
    rows: usize,
    cols: usize,
) {
    let mut current_row = 2;

    current_row = render_header(current_row, header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_status(current_row, body.status.as_ref(), theme, cols);

    if let Some(empty) = &body.empty_state {
        render_empty_state(current_row, empty, theme, cols);
    } else {
        current_row = render_table_headers(current_row, theme, cols);
        render_table_rows(current_row, &body.rows, theme, cols);
    }

    render_chrome_bottom(footer, theme, rows, cols);
}

/// Renders the create/edit form.
pub fn render_form_screen(
    header: &HeaderInfo,
    body: &FormBody,
    footer: &FooterInfo,
    theme: &Theme,
    rows: usize,
    cols: usize,
) {
    let mut current_row = 2;

    current_row = render_header(current_row, header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    render_form(current_row + 1, body, theme, cols);

    render_chrome_bottom(footer, theme, rows, cols);
}
