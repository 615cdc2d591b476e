//! View model types representing renderable UI state.
//!
//! View models are computed from controller snapshots by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They hold
//! display-ready strings only; nothing in here can change controller state.
//!
//! # Example
//!
//! ```
//! use staffboard::ui::viewmodel::{
//!     FooterInfo, HeaderInfo, ListBody, ScreenBody, UIViewModel,
//! };
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: "Employee Directory".into(), subtitle: None },
//!     body: ScreenBody::List(ListBody { rows: vec![], status: None, empty_state: None }),
//!     dialog: None,
//!     footer: FooterInfo { keybindings: "q: quit".into() },
//! };
//! assert!(vm.dialog.is_none());
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub body: ScreenBody,
    /// Modal dialog drawn over the body, if one is open.
    pub dialog: Option<DialogInfo>,
    pub footer: FooterInfo,
}

/// Screen-specific content between header and footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenBody {
    List(ListBody),
    Form(FormBody),
}

/// Employee table and its load status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListBody {
    /// Rows inside the visible window.
    pub rows: Vec<DisplayRow>,
    pub status: Option<StatusLine>,
    /// Shown instead of the table when nothing is loaded.
    pub empty_state: Option<EmptyState>,
}

/// One employee row, pre-formatted for the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub name: String,
    pub email: String,
    pub department: String,
    pub salary: String,
    pub age: String,
    pub is_selected: bool,
}

/// Loading or error line above the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub message: String,
    pub kind: StatusKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Loading,
    Error,
}

/// Create/edit form fields and submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormBody {
    pub fields: Vec<FieldRow>,
    pub submit_label: String,
    /// False while a save is in flight.
    pub submit_enabled: bool,
}

/// One labelled input with its inline error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    pub label: String,
    pub value: String,
    pub error: Option<String>,
    pub is_focused: bool,
}

/// Modal dialog content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogInfo {
    pub title: String,
    pub message: String,
    pub kind: DialogKind,
    /// Key hint line, e.g. "y: delete  n: cancel".
    pub hint: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Confirm,
    Busy,
    Success,
    Failure,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// Secondary line such as the employee count and refresh age.
    pub subtitle: Option<String>,
}

/// Footer display information.
///
/// Contains help text and keybinding hints for the bottom of the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}
