//! Editable employee fields and their length limits.

use crate::domain::error::StaffboardError;
use std::fmt;
use std::str::FromStr;

/// One of the five editable employee fields.
///
/// Declaration order is form order; `Ord` follows it so error maps keyed by
/// `Field` iterate top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Department,
    Salary,
    Age,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Email,
        Self::Department,
        Self::Salary,
        Self::Age,
    ];

    /// Wire and configuration name of the field.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Department => "department",
            Self::Salary => "salary",
            Self::Age => "age",
        }
    }

    /// Human-readable label shown next to the input.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Department => "Department",
            Self::Salary => "Salary",
            Self::Age => "Age",
        }
    }

    /// Maximum length in characters, for the text fields that have one.
    #[must_use]
    pub const fn max_len(self) -> Option<usize> {
        match self {
            Self::Name | Self::Email => Some(50),
            Self::Department => Some(30),
            Self::Salary | Self::Age => None,
        }
    }

    /// Cuts `raw` down to [`Field::max_len`] characters.
    ///
    /// Fields without a limit are returned unchanged.
    #[must_use]
    pub fn truncate(self, raw: &str) -> String {
        match self.max_len() {
            Some(limit) => raw.chars().take(limit).collect(),
            None => raw.to_string(),
        }
    }

    /// The field after this one, wrapping from the last to the first.
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// The field before this one, wrapping from the first to the last.
    #[must_use]
    pub fn previous(self) -> Self {
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = StaffboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| StaffboardError::UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_names_and_rejects_others() {
        assert_eq!("department".parse::<Field>().unwrap(), Field::Department);
        assert!(matches!(
            "nickname".parse::<Field>(),
            Err(StaffboardError::UnknownField(name)) if name == "nickname"
        ));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let long = "é".repeat(60);
        let cut = Field::Name.truncate(&long);

        assert_eq!(cut.chars().count(), 50);
        assert_eq!(Field::Department.truncate(&"x".repeat(40)).len(), 30);
        assert_eq!(Field::Salary.truncate("123456789"), "123456789");
    }

    #[test]
    fn focus_order_wraps_in_both_directions() {
        assert_eq!(Field::Age.next(), Field::Name);
        assert_eq!(Field::Name.previous(), Field::Age);
        assert_eq!(Field::Email.next(), Field::Department);
    }
}
