//! Application state management and view model computation.
//!
//! [`AppState`] ties the two controllers together with the UI-only state that
//! belongs to neither of them: the active screen, the highlighted row, the
//! focused form field, and the theme. It is mutated only by
//! [`crate::app::handle_event`] and rendered through [`AppState::compute_viewmodel`].
//!
//! # State Components
//!
//! - **List**: the [`ListController`], alive for the whole plugin lifetime
//! - **Form**: an optional [`FormController`], present only on the form screen
//! - **Selection**: cursor position within the loaded records
//! - **Focus**: the form field receiving typed characters
//! - **Theme**: presentation configuration, toggled between light and dark
//!
//! # Example
//!
//! ```
//! use staffboard::app::AppState;
//! use staffboard::client::RecordStoreClient;
//! use staffboard::ui::Theme;
//!
//! let state = AppState::new(RecordStoreClient::default(), Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 100);
//! assert_eq!(viewmodel.header.title, "Employee Directory");
//! ```

use super::deletion::{DeleteFlow, DeleteOutcome};
use super::form::{FormController, FormPhase};
use super::list::{ListController, LoadStatus};
use super::modes::Screen;
use crate::client::RecordStoreClient;
use crate::domain::{EmployeeRecord, Field};
use crate::ui::helpers::{format_refresh_age, format_salary};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DialogInfo, DialogKind, DisplayRow, EmptyState, FieldRow, FooterInfo, FormBody, HeaderInfo,
    ListBody, ScreenBody, StatusKind, StatusLine, UIViewModel,
};

/// Rows taken by header, borders, table heading, status line and footer.
const LIST_CHROME_ROWS: usize = 8;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Screen currently displayed.
    pub screen: Screen,

    /// Employee list controller.
    pub list: ListController,

    /// Form controller while the form screen is open.
    pub form: Option<FormController>,

    /// Zero-based index of the highlighted row within the loaded records.
    pub selected_index: usize,

    /// Form field receiving character input.
    pub focused_field: Field,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    client: RecordStoreClient,
    next_form_session: u64,
}

impl AppState {
    /// Creates the initial state: list screen, nothing loaded yet.
    #[must_use]
    pub fn new(client: RecordStoreClient, theme: Theme) -> Self {
        Self {
            screen: Screen::List,
            list: ListController::new(client.clone()),
            form: None,
            selected_index: 0,
            focused_field: Field::Name,
            theme,
            client,
            next_form_session: 1,
        }
    }

    #[must_use]
    pub const fn client(&self) -> &RecordStoreClient {
        &self.client
    }

    /// Moves the highlight down by one row, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let len = self.list.records().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves the highlight up by one row, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let len = self.list.records().len();
        if len == 0 {
            return;
        }
        self.selected_index = if self.selected_index == 0 { len - 1 } else { self.selected_index - 1 };
    }

    /// Keeps the highlight inside the current records after a reload.
    pub fn clamp_selection(&mut self) {
        let len = self.list.records().len();
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }

    #[must_use]
    pub fn selected_record(&self) -> Option<&EmployeeRecord> {
        self.list.records().get(self.selected_index)
    }

    /// True when a modal dialog covers the active screen.
    #[must_use]
    pub fn has_open_dialog(&self) -> bool {
        match self.screen {
            Screen::List => self.list.open_dialog().is_some(),
            Screen::Form => self.form.as_ref().is_some_and(|form| form.notification().is_some()),
        }
    }

    /// Opens an empty create form.
    pub fn open_create_form(&mut self) {
        let session = self.take_form_session();
        self.form = Some(FormController::create(self.client.clone(), session));
        self.enter_form();
    }

    /// Opens an edit form for the highlighted record.
    ///
    /// Returns `false` if no record is highlighted.
    pub fn open_edit_form(&mut self) -> bool {
        let Some(record) = self.selected_record().cloned() else {
            return false;
        };
        let session = self.take_form_session();
        self.form = Some(FormController::edit(&record, self.client.clone(), session));
        self.enter_form();
        true
    }

    /// Drops the form and shows the list again.
    pub fn close_form(&mut self) {
        self.form = None;
        self.screen = Screen::List;
    }

    fn enter_form(&mut self) {
        self.screen = Screen::Form;
        self.focused_field = Field::Name;
    }

    fn take_form_session(&mut self) -> u64 {
        let session = self.next_form_session;
        self.next_form_session += 1;
        session
    }

    /// Builds the view model for a terminal of `rows` × `cols`.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, _cols: usize) -> UIViewModel {
        match (self.screen, self.form.as_ref()) {
            (Screen::Form, Some(form)) => self.compute_form_viewmodel(form),
            _ => self.compute_list_viewmodel(rows),
        }
    }

    fn compute_list_viewmodel(&self, rows: usize) -> UIViewModel {
        let records = self.list.records();
        let available_rows = rows.saturating_sub(LIST_CHROME_ROWS).max(1);

        let selected = self.selected_index.min(records.len().saturating_sub(1));

        let mut visible_start = selected.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(records.len());
        if visible_end - visible_start < available_rows && records.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let display_rows = records[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(offset, record)| DisplayRow {
                name: record.name.clone(),
                email: record.email.clone(),
                department: record.department.clone(),
                salary: format_salary(record.salary),
                age: record.age.to_string(),
                is_selected: visible_start + offset == selected,
            })
            .collect();

        let status = match self.list.status() {
            LoadStatus::Idle => None,
            LoadStatus::Loading => Some(StatusLine {
                message: "Loading employees...".to_string(),
                kind: StatusKind::Loading,
            }),
            LoadStatus::Error(reason) => Some(StatusLine {
                message: format!("Error loading employees: {reason}  (r: retry)"),
                kind: StatusKind::Error,
            }),
        };

        let empty_state = (records.is_empty() && *self.list.status() == LoadStatus::Idle).then(|| EmptyState {
            message: "No employees found.".to_string(),
            subtitle: "Press a to add a new employee".to_string(),
        });

        let mut subtitle = format!("Employees ({})", records.len());
        if let Some(loaded_at) = self.list.view().loaded_at {
            let now = chrono::Utc::now().timestamp();
            subtitle.push_str(&format!(" · {}", format_refresh_age(now, loaded_at)));
        }

        UIViewModel {
            header: HeaderInfo {
                title: "Employee Directory".to_string(),
                subtitle: Some(subtitle),
            },
            body: ScreenBody::List(ListBody {
                rows: display_rows,
                status,
                empty_state,
            }),
            dialog: self.compute_delete_dialog(),
            footer: self.compute_footer(),
        }
    }

    fn compute_delete_dialog(&self) -> Option<DialogInfo> {
        let (id, flow) = self.list.open_dialog()?;
        let name = self.list.name_of(id).unwrap_or(id.as_str());
        let confirm_message = format!("Are you sure you want to delete {name}? This action cannot be undone.");

        Some(match flow {
            DeleteFlow::Closed => return None,
            DeleteFlow::ConfirmPending => DialogInfo {
                title: "Confirm Delete".to_string(),
                message: confirm_message,
                kind: DialogKind::Confirm,
                hint: "y: delete  n: cancel".to_string(),
            },
            DeleteFlow::InFlight => DialogInfo {
                title: "Confirm Delete".to_string(),
                message: confirm_message,
                kind: DialogKind::Busy,
                hint: "Deleting...".to_string(),
            },
            DeleteFlow::ResultShown(outcome) => {
                let deleted = matches!(outcome, DeleteOutcome::Deleted { .. });
                DialogInfo {
                    title: if deleted { "Success" } else { "Error" }.to_string(),
                    message: outcome.message(),
                    kind: if deleted { DialogKind::Success } else { DialogKind::Failure },
                    hint: "Enter: OK".to_string(),
                }
            }
        })
    }

    fn compute_form_viewmodel(&self, form: &FormController) -> UIViewModel {
        let draft = form.draft();
        let fields = Field::ALL
            .into_iter()
            .map(|field| FieldRow {
                label: field.label().to_string(),
                value: draft.value(field).to_string(),
                error: draft.error(field).map(|e| e.to_string()),
                is_focused: field == self.focused_field,
            })
            .collect();

        let submit_label = match (form.is_busy(), form.mode().is_edit()) {
            (true, _) => "Saving...",
            (false, true) => "Update Employee",
            (false, false) => "Add Employee",
        };

        let dialog = form.notification().map(|message| {
            let succeeded = matches!(form.phase(), FormPhase::SubmitSucceeded { .. });
            DialogInfo {
                title: if succeeded { "Success" } else { "Error" }.to_string(),
                message,
                kind: if succeeded { DialogKind::Success } else { DialogKind::Failure },
                hint: "Enter: OK".to_string(),
            }
        });

        UIViewModel {
            header: HeaderInfo {
                title: form.mode().title().to_string(),
                subtitle: None,
            },
            body: ScreenBody::Form(FormBody {
                fields,
                submit_label: submit_label.to_string(),
                submit_enabled: !form.is_busy(),
            }),
            dialog,
            footer: self.compute_footer(),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.screen, self.has_open_dialog()) {
            (Screen::List, false) => {
                "j/k: navigate  a: add  e/Enter: edit  d: delete  r: refresh  t: theme  q: quit"
            }
            (Screen::List, true) => match self.list.open_dialog().map(|(_, flow)| flow) {
                Some(DeleteFlow::ConfirmPending) => "y/Enter: delete  n/Esc: cancel",
                Some(DeleteFlow::InFlight) => "waiting for the server...",
                _ => "Enter/Esc: OK",
            },
            (Screen::Form, false) => "Tab/Shift+Tab: field  Enter: save  Esc: back",
            (Screen::Form, true) => "Enter/Esc: OK",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Outcome;
    use crate::domain::EmployeeId;

    fn record(id: &str, name: &str) -> EmployeeRecord {
        EmployeeRecord {
            id: EmployeeId::new(id),
            name: name.into(),
            email: "x@example.com".into(),
            department: "Eng".into(),
            salary: 250_000.0,
            age: 40,
        }
    }

    fn state_with(records: Vec<EmployeeRecord>) -> AppState {
        let mut state = AppState::new(RecordStoreClient::default(), Theme::default());
        state.list.load();
        state.list.on_list_reply(Outcome::Ok(records));
        state
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut state = state_with(vec![record("1", "Ada"), record("2", "Bo")]);

        state.move_selection_up();
        assert_eq!(state.selected_index, 1);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn list_viewmodel_formats_rows_and_count() {
        let state = state_with(vec![record("1", "Ada")]);
        let vm = state.compute_viewmodel(24, 100);

        let ScreenBody::List(body) = vm.body else {
            panic!("expected the list screen");
        };
        assert_eq!(body.rows[0].salary, "₹2,50,000.00");
        assert!(body.rows[0].is_selected);
        assert!(vm.header.subtitle.unwrap().starts_with("Employees (1)"));
    }

    #[test]
    fn empty_idle_list_shows_empty_state() {
        let state = state_with(vec![]);
        let ScreenBody::List(body) = state.compute_viewmodel(24, 100).body else {
            panic!("expected the list screen");
        };

        assert_eq!(body.empty_state.unwrap().message, "No employees found.");
    }

    #[test]
    fn confirm_dialog_names_the_employee() {
        let mut state = state_with(vec![record("1", "Ada")]);
        state.list.on_request_delete(&EmployeeId::new("1")).unwrap();

        let dialog = state.compute_viewmodel(24, 100).dialog.unwrap();
        assert_eq!(dialog.kind, DialogKind::Confirm);
        assert_eq!(dialog.message, "Are you sure you want to delete Ada? This action cannot be undone.");
    }

    #[test]
    fn form_viewmodel_disables_submit_while_saving() {
        let mut state = state_with(vec![record("1", "Ada")]);
        assert!(state.open_edit_form());
        state.form.as_mut().unwrap().on_submit().unwrap();

        let ScreenBody::Form(body) = state.compute_viewmodel(24, 100).body else {
            panic!("expected the form screen");
        };
        assert_eq!(body.submit_label, "Saving...");
        assert!(!body.submit_enabled);
    }

    #[test]
    fn long_lists_window_around_the_selection() {
        let records = (0..50).map(|i| record(&i.to_string(), &format!("E{i}"))).collect();
        let mut state = state_with(records);
        state.selected_index = 49;

        let ScreenBody::List(body) = state.compute_viewmodel(18, 100).body else {
            panic!("expected the list screen");
        };
        assert_eq!(body.rows.len(), 10);
        assert!(body.rows.last().unwrap().is_selected);
    }
}
