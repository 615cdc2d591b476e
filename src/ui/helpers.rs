//! Shared rendering and formatting utilities.

/// Moves the terminal cursor to a 1-indexed `row`, `col` position.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Pads or cuts `text` to exactly `width` characters.
///
/// Cut text ends in `…` so truncation is visible.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return format!("{text}{}", " ".repeat(width - len));
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Centers `text` within `width` columns, cutting it if it does not fit.
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count().min(width);
    let left = (width - len) / 2;
    format!("{}{}", " ".repeat(left), fit(text, width - left))
}

/// Greedy word wrap to lines of at most `width` characters.
///
/// Words longer than `width` are cut to fit.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let needed = if line.is_empty() { 0 } else { 1 } + word.chars().count();
        if !line.is_empty() && line.chars().count() + needed > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
        if line.chars().count() > width {
            lines.push(fit(&line, width));
            line.clear();
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Formats a salary in rupees with Indian digit grouping, e.g. `₹1,00,000.00`.
#[must_use]
pub fn format_salary(salary: f64) -> String {
    let fixed = format!("{:.2}", salary.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let digits: Vec<char> = whole.chars().collect();
    let mut grouped = String::new();
    let split = digits.len().saturating_sub(3);
    let (head, tail) = digits.split_at(split);
    for (i, digit) in head.iter().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }
    if !head.is_empty() {
        grouped.push(',');
    }
    grouped.extend(tail);

    let sign = if salary < 0.0 { "-" } else { "" };
    format!("{sign}₹{grouped}.{fraction}")
}

/// Describes how long ago `then` was, relative to `now` (both unix seconds).
#[must_use]
pub fn format_refresh_age(now: i64, then: i64) -> String {
    let seconds = (now - then).max(0);
    match seconds {
        0..=59 => "refreshed just now".to_string(),
        60..=3599 => format!("refreshed {}m ago", seconds / 60),
        3600..=86_399 => format!("refreshed {}h ago", seconds / 3600),
        _ => format!("refreshed {}d ago", seconds / 86_400),
    }
}
