//! Field-level validation of raw form input.
//!
//! [`validate`] is pure and total: every `(field, raw)` pair maps to either no
//! error or exactly one [`FieldError`]. Rules are checked in a fixed order and
//! the first failing rule wins:
//!
//! | Field | Rules |
//! |---|---|
//! | name | required, too long (> 50) |
//! | email | required, invalid format, too long (> 50) |
//! | department | required, too long (> 30) |
//! | salary | required, numeric only, negative |
//! | age | required, numeric only, out of range (18..=100) |
//!
//! Text fields treat whitespace-only input as missing; the numeric fields only
//! treat the exact empty string as missing, so `" 5"` is `numeric only`.
//!
//! # Example
//!
//! ```
//! use staffboard::domain::{validate, Field, FieldError};
//!
//! assert_eq!(validate(Field::Age, "17"), Some(FieldError::OutOfRange));
//! assert_eq!(validate(Field::Age, "18"), None);
//! assert_eq!(validate(Field::Email, "a@b"), Some(FieldError::InvalidFormat));
//! ```

use crate::domain::error::Result;
use crate::domain::field::Field;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    static ref EMAIL_PATTERN: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    static ref DECIMAL_PATTERN: Regex = Regex::new(r"^[0-9]*\.?[0-9]*$").unwrap();
    static ref DIGITS_PATTERN: Regex = Regex::new(r"^[0-9]+$").unwrap();
}

/// Youngest accepted age, inclusive.
pub const MIN_AGE: u32 = 18;
/// Oldest accepted age, inclusive.
pub const MAX_AGE: u32 = 100;

/// A single validation failure for one field.
///
/// `Display` yields the exact short message shown inline under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    TooLong,
    InvalidFormat,
    NumericOnly,
    Negative,
    OutOfRange,
}

impl FieldError {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::TooLong => "too long",
            Self::InvalidFormat => "invalid format",
            Self::NumericOnly => "numeric only",
            Self::Negative => "negative",
            Self::OutOfRange => "out of range",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Validates one raw field value.
#[must_use]
pub fn validate(field: Field, raw: &str) -> Option<FieldError> {
    let result = match field {
        Field::Name | Field::Department => check_text(field, raw),
        Field::Email => check_email(raw),
        Field::Salary => parse_salary(raw).map(|_| ()),
        Field::Age => parse_age(raw).map(|_| ()),
    };
    result.err()
}

/// Validates a raw value addressed by its field name.
///
/// # Errors
///
/// Returns [`crate::StaffboardError::UnknownField`] if `name` is not one of the
/// five editable fields.
pub fn validate_named(name: &str, raw: &str) -> Result<Option<FieldError>> {
    let field: Field = name.parse()?;
    Ok(validate(field, raw))
}

/// Parses a salary the way validation accepts it.
///
/// # Errors
///
/// Returns the [`FieldError`] that [`validate`] would report for `raw`.
pub fn parse_salary(raw: &str) -> std::result::Result<f64, FieldError> {
    if raw.is_empty() {
        return Err(FieldError::Required);
    }
    if !DECIMAL_PATTERN.is_match(raw) {
        return Err(FieldError::NumericOnly);
    }
    // "." passes the pattern but carries no digits.
    let value: f64 = raw.parse().map_err(|_| FieldError::NumericOnly)?;
    if value < 0.0 {
        return Err(FieldError::Negative);
    }
    Ok(value)
}

/// Parses an age the way validation accepts it.
///
/// All-digit input too large for `u32` is reported as out of range.
///
/// # Errors
///
/// Returns the [`FieldError`] that [`validate`] would report for `raw`.
pub fn parse_age(raw: &str) -> std::result::Result<u32, FieldError> {
    if raw.is_empty() {
        return Err(FieldError::Required);
    }
    if !DIGITS_PATTERN.is_match(raw) {
        return Err(FieldError::NumericOnly);
    }
    let age: u32 = raw.parse().map_err(|_| FieldError::OutOfRange)?;
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(FieldError::OutOfRange);
    }
    Ok(age)
}

fn check_text(field: Field, raw: &str) -> std::result::Result<(), FieldError> {
    if raw.trim().is_empty() {
        return Err(FieldError::Required);
    }
    check_length(field, raw)
}

fn check_email(raw: &str) -> std::result::Result<(), FieldError> {
    if raw.trim().is_empty() {
        return Err(FieldError::Required);
    }
    if !EMAIL_PATTERN.is_match(raw) {
        return Err(FieldError::InvalidFormat);
    }
    check_length(Field::Email, raw)
}

fn check_length(field: Field, raw: &str) -> std::result::Result<(), FieldError> {
    match field.max_len() {
        Some(limit) if raw.chars().count() > limit => Err(FieldError::TooLong),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Field::Name, "", Some(FieldError::Required))]
    #[case(Field::Name, "   ", Some(FieldError::Required))]
    #[case(Field::Name, "Ada Lovelace", None)]
    #[case(Field::Department, "\t", Some(FieldError::Required))]
    #[case(Field::Department, "Engineering", None)]
    #[case(Field::Email, "", Some(FieldError::Required))]
    #[case(Field::Email, "ada@example.com", None)]
    #[case(Field::Email, "ADA@EXAMPLE.COM", None)]
    #[case(Field::Email, "ada@example", Some(FieldError::InvalidFormat))]
    #[case(Field::Email, "ada @example.com", Some(FieldError::InvalidFormat))]
    #[case(Field::Email, "a@b@c.com", Some(FieldError::InvalidFormat))]
    #[case(Field::Salary, "", Some(FieldError::Required))]
    #[case(Field::Salary, "1000", None)]
    #[case(Field::Salary, "1000.50", None)]
    #[case(Field::Salary, ".5", None)]
    #[case(Field::Salary, "5.", None)]
    #[case(Field::Salary, "0", None)]
    #[case(Field::Salary, ".", Some(FieldError::NumericOnly))]
    #[case(Field::Salary, "-1", Some(FieldError::NumericOnly))]
    #[case(Field::Salary, "1.2.3", Some(FieldError::NumericOnly))]
    #[case(Field::Salary, "1e3", Some(FieldError::NumericOnly))]
    #[case(Field::Salary, " 5", Some(FieldError::NumericOnly))]
    #[case(Field::Age, "", Some(FieldError::Required))]
    #[case(Field::Age, "30", None)]
    #[case(Field::Age, "3O", Some(FieldError::NumericOnly))]
    #[case(Field::Age, "30.0", Some(FieldError::NumericOnly))]
    #[case(Field::Age, "99999999999999999999", Some(FieldError::OutOfRange))]
    fn validates_each_rule(#[case] field: Field, #[case] raw: &str, #[case] expected: Option<FieldError>) {
        assert_eq!(validate(field, raw), expected);
    }

    #[rstest]
    #[case("17", Some(FieldError::OutOfRange))]
    #[case("18", None)]
    #[case("100", None)]
    #[case("101", Some(FieldError::OutOfRange))]
    #[case("0018", None)]
    fn age_boundaries_are_inclusive(#[case] raw: &str, #[case] expected: Option<FieldError>) {
        assert_eq!(validate(Field::Age, raw), expected);
    }

    #[test]
    fn rejects_overlong_values_even_without_truncation() {
        assert_eq!(validate(Field::Name, &"n".repeat(51)), Some(FieldError::TooLong));
        assert_eq!(validate(Field::Name, &"n".repeat(50)), None);
        assert_eq!(validate(Field::Department, &"d".repeat(31)), Some(FieldError::TooLong));

        let long_email = format!("{}@example.com", "a".repeat(40));
        assert_eq!(validate(Field::Email, &long_email), Some(FieldError::TooLong));
    }

    #[test]
    fn unicode_digits_are_not_numeric() {
        assert_eq!(validate(Field::Age, "٣٠"), Some(FieldError::NumericOnly));
    }

    #[test]
    fn messages_match_inline_text() {
        let rendered: Vec<String> = [
            FieldError::Required,
            FieldError::TooLong,
            FieldError::InvalidFormat,
            FieldError::NumericOnly,
            FieldError::Negative,
            FieldError::OutOfRange,
        ]
        .iter()
        .map(ToString::to_string)
        .collect();

        assert_eq!(
            rendered,
            ["required", "too long", "invalid format", "numeric only", "negative", "out of range"]
        );
    }

    #[test]
    fn named_lookup_reports_unknown_fields() {
        assert_eq!(validate_named("age", "17").unwrap(), Some(FieldError::OutOfRange));
        assert!(validate_named("title", "x").is_err());
    }

    #[test]
    fn parsers_return_coerced_values() {
        assert_eq!(parse_salary("1000.25"), Ok(1000.25));
        assert_eq!(parse_age("42"), Ok(42));
    }
}
