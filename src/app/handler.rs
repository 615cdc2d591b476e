//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user intents
//! and store replies, translating them into controller calls and action
//! sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime (keys, web request results)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. The form or list controller updates its own state
//! 4. Requests the controllers produce are returned as [`Action::Dispatch`]
//!
//! # Event Types
//!
//! - **Lifecycle**: `Mount`, `CloseFocus`, `ToggleTheme`
//! - **List**: `SelectNext`, `SelectPrevious`, `RetryLoad`, `OpenCreateForm`, `OpenEditForm`
//! - **Delete dialog**: `RequestDelete`, `ConfirmDelete`, `CancelDelete`
//! - **Form**: `FocusNextField`, `FocusPreviousField`, `Char`, `Backspace`,
//!   `FieldChanged`, `Submit`, `Back`
//! - **Either dialog**: `AcknowledgeResult`
//! - **Store**: `StoreReply` with the tag of the request it answers
//!
//! Intents that do not apply to the current screen are ignored without a
//! render. Delete-dialog intents with no dialog open, or that the row's state
//! machine rejects, surface as errors.
//!
//! # Example
//!
//! ```
//! use staffboard::app::{handle_event, Action, AppState, Event};
//! use staffboard::client::RecordStoreClient;
//! use staffboard::ui::Theme;
//!
//! let mut state = AppState::new(RecordStoreClient::default(), Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::Mount)?;
//! assert!(render);
//! assert!(matches!(actions.as_slice(), [Action::Dispatch(_)]));
//! # Ok::<(), staffboard::StaffboardError>(())
//! ```

use crate::app::deletion::{DeleteFlow, DeleteIntent, SequencerError};
use crate::app::form::FormExit;
use crate::app::modes::Screen;
use crate::app::{Action, AppState};
use crate::client::{decode_deleted, decode_list, decode_saved, Reply, RequestTag};
use crate::domain::error::Result;
use crate::domain::{EmployeeId, Field};

/// Events triggered by user input or by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The list screen became visible; fetches the collection.
    Mount,
    /// Hides the plugin UI.
    CloseFocus,
    /// Switches between the light and dark theme.
    ToggleTheme,

    /// Moves the row highlight down by one (wraps to top).
    SelectNext,
    /// Moves the row highlight up by one (wraps to bottom).
    SelectPrevious,
    /// Fetches the collection again, typically after a load error.
    RetryLoad,
    /// Opens an empty create form.
    OpenCreateForm,
    /// Opens an edit form for the highlighted row.
    OpenEditForm,

    /// Opens the delete confirmation for the highlighted row.
    RequestDelete,
    /// Confirms the open delete confirmation.
    ConfirmDelete,
    /// Dismisses the open delete confirmation.
    CancelDelete,
    /// Dismisses whichever result dialog is showing.
    AcknowledgeResult,

    /// Moves form focus to the next field.
    FocusNextField,
    /// Moves form focus to the previous field.
    FocusPreviousField,
    /// Appends a character to the focused field.
    Char(char),
    /// Removes the last character of the focused field.
    Backspace,
    /// Replaces a field's whole value.
    FieldChanged {
        field: Field,
        value: String,
    },
    /// Submits the form.
    Submit,
    /// Leaves the form without saving.
    Back,

    /// A record store request completed.
    StoreReply {
        tag: RequestTag,
        reply: Reply,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`: whether the UI changed, and the side effects to
/// perform in order.
///
/// # Errors
///
/// Returns [`crate::StaffboardError::Sequencer`] when a delete-dialog intent
/// arrives with no dialog open or in a state that cannot accept it.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let on_list = state.screen == Screen::List;
    let on_form = state.screen == Screen::Form;
    let dialog_open = state.has_open_dialog();

    match event {
        Event::Mount => Ok((true, vec![Action::Dispatch(state.list.load())])),
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::ToggleTheme => {
            state.theme = state.theme.toggled();
            tracing::debug!(theme = %state.theme.name, "theme toggled");
            Ok((true, vec![]))
        }

        Event::SelectNext | Event::SelectPrevious | Event::RetryLoad | Event::OpenCreateForm
        | Event::OpenEditForm | Event::RequestDelete
            if !on_list || dialog_open =>
        {
            tracing::debug!("list intent ignored while the list is not interactive");
            Ok((false, vec![]))
        }
        Event::SelectNext => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::SelectPrevious => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::RetryLoad => Ok((true, vec![Action::Dispatch(state.list.retry())])),
        Event::OpenCreateForm => {
            state.open_create_form();
            Ok((true, vec![]))
        }
        Event::OpenEditForm => {
            if state.open_edit_form() {
                Ok((true, vec![]))
            } else {
                tracing::debug!("no employee selected to edit");
                Ok((false, vec![]))
            }
        }
        Event::RequestDelete => {
            let Some(id) = state.selected_record().map(|record| record.id.clone()) else {
                tracing::debug!("no employee selected to delete");
                return Ok((false, vec![]));
            };
            state.list.on_request_delete(&id)?;
            Ok((true, vec![]))
        }

        Event::ConfirmDelete | Event::CancelDelete if !on_list => Ok((false, vec![])),
        Event::ConfirmDelete => {
            let id = open_dialog_row(state, DeleteIntent::Confirm)?;
            let request = state.list.on_confirm_delete(&id)?;
            Ok((true, vec![Action::Dispatch(request)]))
        }
        Event::CancelDelete => {
            let id = open_dialog_row(state, DeleteIntent::Cancel)?;
            state.list.on_cancel_delete(&id)?;
            Ok((true, vec![]))
        }
        Event::AcknowledgeResult => acknowledge_result(state),

        Event::FocusNextField
        | Event::FocusPreviousField
        | Event::Char(_)
        | Event::Backspace
        | Event::FieldChanged { .. }
        | Event::Submit
        | Event::Back
            if !on_form || dialog_open =>
        {
            tracing::debug!("form intent ignored while the form is not interactive");
            Ok((false, vec![]))
        }
        Event::FocusNextField => {
            state.focused_field = state.focused_field.next();
            Ok((true, vec![]))
        }
        Event::FocusPreviousField => {
            state.focused_field = state.focused_field.previous();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            let field = state.focused_field;
            Ok((edit_field(state, field, |value| value.push(*c)), vec![]))
        }
        Event::Backspace => {
            let field = state.focused_field;
            let changed = edit_field(state, field, |value| {
                value.pop();
            });
            Ok((changed, vec![]))
        }
        Event::FieldChanged { field, value } => {
            let changed = state
                .form
                .as_mut()
                .is_some_and(|form| form.on_field_change(*field, value));
            Ok((changed, vec![]))
        }
        Event::Submit => {
            let Some(form) = state.form.as_mut() else {
                return Ok((false, vec![]));
            };
            let actions = form.on_submit().map(Action::Dispatch).into_iter().collect();
            Ok((true, actions))
        }
        Event::Back => {
            tracing::debug!("leaving form without saving");
            state.close_form();
            Ok((true, vec![Action::Dispatch(state.list.load())]))
        }

        Event::StoreReply { tag, reply } => Ok(apply_reply(state, tag, reply)),
    }
}

fn open_dialog_row(state: &AppState, intent: DeleteIntent) -> Result<EmployeeId> {
    state
        .list
        .open_dialog()
        .map(|(id, _)| id.clone())
        .ok_or_else(|| {
            SequencerError::InvalidTransition {
                intent,
                state: DeleteFlow::Closed.state_name(),
            }
            .into()
        })
}

fn acknowledge_result(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    match state.screen {
        Screen::List => {
            let id = open_dialog_row(state, DeleteIntent::Acknowledge)?;
            let refresh = state.list.on_acknowledge_result(&id)?;
            Ok((true, refresh.map(Action::Dispatch).into_iter().collect()))
        }
        Screen::Form => {
            let Some(form) = state.form.as_mut() else {
                return Ok((false, vec![]));
            };
            let had_dialog = form.notification().is_some();
            match form.on_acknowledge() {
                FormExit::ReturnToList => {
                    state.close_form();
                    Ok((true, vec![Action::Dispatch(state.list.load())]))
                }
                FormExit::Stay => Ok((had_dialog, vec![])),
            }
        }
    }
}

fn edit_field(state: &mut AppState, field: Field, edit: impl FnOnce(&mut String)) -> bool {
    let Some(form) = state.form.as_mut() else {
        return false;
    };
    let mut value = form.draft().value(field).to_string();
    edit(&mut value);
    form.on_field_change(field, &value)
}

fn apply_reply(state: &mut AppState, tag: &RequestTag, reply: &Reply) -> (bool, Vec<Action>) {
    match tag {
        RequestTag::List => {
            state.list.on_list_reply(decode_list(reply));
            state.clamp_selection();
            (true, vec![])
        }
        RequestTag::Save { session } => match state.form.as_mut() {
            Some(form) if form.session() == *session => (form.on_save_reply(decode_saved(reply)), vec![]),
            _ => {
                tracing::debug!(session = *session, "discarding save reply for a closed form");
                (false, vec![])
            }
        },
        RequestTag::Delete { id } => match state.list.on_delete_reply(id, decode_deleted(reply)) {
            Ok(()) => (true, vec![]),
            Err(e) => {
                tracing::debug!(employee_id = %id, error = %e, "discarding stale delete reply");
                (false, vec![])
            }
        },
    }
}
