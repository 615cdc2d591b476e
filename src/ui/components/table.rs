//! Table component renderer.
//!
//! Renders the employee list as a five-column table. Column widths are fixed
//! except Email, which absorbs whatever width the others leave.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayRow;

const NAME_WIDTH: usize = 22;
const DEPARTMENT_WIDTH: usize = 16;
const SALARY_WIDTH: usize = 16;
const AGE_WIDTH: usize = 4;
const GAP: &str = "  ";

fn email_width(cols: usize) -> usize {
    let fixed = NAME_WIDTH + DEPARTMENT_WIDTH + SALARY_WIDTH + AGE_WIDTH + GAP.len() * 4;
    cols.saturating_sub(fixed).max(10)
}

fn fit_right(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len < width {
        format!("{}{text}", " ".repeat(width - len))
    } else {
        fit(text, width)
    }
}

fn format_line(cells: [&str; 5], cols: usize) -> String {
    let [name, email, department, salary, age] = cells;
    let line = format!(
        "{}{GAP}{}{GAP}{}{GAP}{}{GAP}{}",
        fit(name, NAME_WIDTH),
        fit(email, email_width(cols)),
        fit(department, DEPARTMENT_WIDTH),
        fit_right(salary, SALARY_WIDTH),
        fit_right(age, AGE_WIDTH),
    );
    fit(&line, cols)
}

/// Renders the column headings and returns the next free row.
pub fn render_table_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{}", format_line(["NAME", "EMAIL", "DEPARTMENT", "SALARY", "AGE"], cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders every visible row and returns the row after the last one.
pub fn render_table_rows(row: usize, rows: &[DisplayRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for display_row in rows {
        current_row = render_table_row(current_row, display_row, theme, cols);
    }
    current_row
}

/// The selected row is painted across the full width.
fn render_table_row(row: usize, item: &DisplayRow, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    print!(
        "{}",
        format_line([&item.name, &item.email, &item.department, &item.salary, &item.age], cols)
    );
    print!("{}", Theme::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_fill_the_width_exactly() {
        let line = format_line(["Ada Lovelace", "ada@example.com", "Engineering", "₹1,20,000.00", "36"], 100);
        assert_eq!(line.chars().count(), 100);
        assert!(line.starts_with("Ada Lovelace"));
        assert!(line.ends_with("  36"));
    }

    #[test]
    fn narrow_panes_keep_a_minimum_email_column() {
        assert_eq!(email_width(40), 10);
    }
}
