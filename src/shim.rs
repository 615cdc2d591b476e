//! Zellij plugin wrapper.
//!
//! Translates Zellij events into library events, runs them through
//! [`handle_event`], and executes the resulting actions with the Zellij API.
//!
//! # Event Mapping
//!
//! - `Key` → list, dialog or form intents depending on the active screen
//! - `WebRequestResult` → `Event::StoreReply`, routed by the request's context map
//! - `PermissionRequestResult(Granted)` → `Event::Mount`
//!
//! # Keybindings
//!
//! List screen:
//! - `j`/`Down`, `k`/`Up`: Move selection
//! - `a`: Add employee
//! - `e`/`Enter`: Edit selected
//! - `d`: Delete selected
//! - `r`: Reload
//! - `t`: Toggle light/dark theme
//! - `q`: Close plugin
//!
//! Delete confirmation: `y`/`Enter` confirm, `n`/`Esc` cancel.
//!
//! Form screen:
//! - `Tab`/`Down`: Next field
//! - `Shift+Tab`/`Up`: Previous field
//! - Characters, `Backspace`: Edit focused field
//! - `Enter`: Save
//! - `Esc`: Back to list
//!
//! Any result dialog: `Enter`/`Esc` to dismiss.

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use staffboard::app::{DeleteFlow, Screen};
use staffboard::client::{trace_from_context, HttpMethod, Reply, RequestTag, StoreRequest};
use staffboard::{handle_event, Action, AppState, Config, Event};

/// Plugin state wrapper around the library's `AppState`.
pub struct State {
    app: AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: staffboard::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        staffboard::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();

        self.app = staffboard::initialize(&config);
        tracing::debug!(config = ?config, "app state initialized");

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        match event {
            zellij_tile::prelude::Event::Key(ref key) => {
                let _guard = tracing::debug_span!("plugin_update_key", bare_key = ?key.bare_key).entered();
                match self.map_key_event(key) {
                    Some(event) => self.dispatch(&event),
                    None => false,
                }
            }
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                self.handle_web_result(status, body, &context)
            }
            zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Granted) => {
                tracing::debug!("web access granted - loading employees");
                self.dispatch(&Event::Mount)
            }
            zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Denied) => {
                tracing::warn!("web access denied - the record store cannot be reached");
                false
            }
            _ => false,
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        staffboard::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Runs one library event and executes its actions.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "event rejected");
                false
            }
        }
    }

    fn handle_web_result(&mut self, status: u16, body: Vec<u8>, context: &BTreeMap<String, String>) -> bool {
        let Some(tag) = RequestTag::from_context(context) else {
            tracing::debug!(status, "ignoring web result without a request tag");
            return false;
        };

        let _parent = trace_from_context(context).and_then(|trace| trace.attach());
        let _guard = tracing::debug_span!("store_reply", status, tag = ?tag).entered();

        self.dispatch(&Event::StoreReply {
            tag,
            reply: Reply::response(status, body),
        })
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        if key.key_modifiers.contains(&KeyModifier::Ctrl) || key.key_modifiers.contains(&KeyModifier::Alt) {
            return None;
        }

        match self.app.screen {
            Screen::List => self.map_list_key(key),
            Screen::Form => self.map_form_key(key),
        }
    }

    fn map_list_key(&self, key: &KeyWithModifier) -> Option<Event> {
        if let Some((_, flow)) = self.app.list.open_dialog() {
            return match (flow, &key.bare_key) {
                (DeleteFlow::ConfirmPending, BareKey::Char('y') | BareKey::Enter) => Some(Event::ConfirmDelete),
                (DeleteFlow::ConfirmPending, BareKey::Char('n') | BareKey::Esc) => Some(Event::CancelDelete),
                (DeleteFlow::ResultShown(_), BareKey::Enter | BareKey::Esc) => Some(Event::AcknowledgeResult),
                _ => None,
            };
        }

        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::SelectNext,
            BareKey::Up | BareKey::Char('k') => Event::SelectPrevious,
            BareKey::Char('a') => Event::OpenCreateForm,
            BareKey::Enter | BareKey::Char('e') => Event::OpenEditForm,
            BareKey::Char('d') => Event::RequestDelete,
            BareKey::Char('r') => Event::RetryLoad,
            BareKey::Char('t') => Event::ToggleTheme,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    fn map_form_key(&self, key: &KeyWithModifier) -> Option<Event> {
        if self.app.has_open_dialog() {
            return matches!(key.bare_key, BareKey::Enter | BareKey::Esc).then_some(Event::AcknowledgeResult);
        }

        Some(match key.bare_key {
            BareKey::Tab if key.key_modifiers.contains(&KeyModifier::Shift) => Event::FocusPreviousField,
            BareKey::Tab | BareKey::Down => Event::FocusNextField,
            BareKey::Up => Event::FocusPreviousField,
            BareKey::Enter => Event::Submit,
            BareKey::Esc => Event::Back,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::Dispatch(request) => Self::send(request),
        }
    }

    fn send(request: &StoreRequest) {
        tracing::debug!(method = %request.method, url = %request.url, "sending store request");

        let verb = match request.method {
            HttpMethod::Get => HttpVerb::Get,
            HttpMethod::Post => HttpVerb::Post,
            HttpMethod::Put => HttpVerb::Put,
            HttpMethod::Delete => HttpVerb::Delete,
        };

        web_request(
            request.url.clone(),
            verb,
            request.headers.clone(),
            request.body.clone(),
            request.context(),
        );
    }
}
