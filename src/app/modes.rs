//! Screen and form mode types.
//!
//! The plugin shows one of two screens. The list screen is always available;
//! the form screen exists only while a [`crate::app::form::FormController`] does.
//! Key bindings and footer text depend on which screen is active and whether a
//! dialog covers it.
//!
//! # Example
//!
//! ```
//! use staffboard::app::modes::{FormMode, Screen};
//! use staffboard::domain::EmployeeId;
//!
//! let screen = Screen::Form;
//! let mode = FormMode::Edit(EmployeeId::new("7"));
//! assert!(mode.is_edit());
//! assert_ne!(screen, Screen::List);
//! ```

use crate::domain::EmployeeId;

/// Which screen is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Employee table with load status and delete dialogs.
    #[default]
    List,

    /// Create or edit form.
    Form,
}

/// Whether a form creates a new employee or updates an existing one.
///
/// Fixed when the form is opened; an edit form keeps the original identity for
/// its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(EmployeeId),
}

impl FormMode {
    #[must_use]
    pub const fn is_edit(&self) -> bool {
        matches!(self, Self::Edit(_))
    }

    /// Title shown above the form.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Create => "Add New Employee",
            Self::Edit(_) => "Edit Employee",
        }
    }
}
