//! Staffboard: a Zellij plugin for maintaining employee records on a remote
//! HTTP service.
//!
//! Staffboard provides:
//! - A browsable employee table loaded from the record store
//! - Create and edit forms with per-field validation before any request
//! - Delete confirmation with a result the user must acknowledge before the
//!   list refreshes
//! - Light and dark themes, switchable at runtime
//! - OpenTelemetry spans exported to a rotating JSON-lines file

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs, shim.rs)              │  ← Entry point, web_request
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling and reply routing                 │
//! │  - Form and list controllers                        │
//! │  - Deletion sequencer                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌──────────────────────┐
//! │ UI Layer      │   │ Client Layer         │
//! │ (ui/)         │   │ (client/)            │
//! │ - Rendering   │   │ - Request building   │
//! │ - Theming     │   │ - Reply normalising  │
//! │ - Components  │   │                      │
//! └───────────────┘   └──────────────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Employee model and validation (domain/)          │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing                            │
//! │  - File-based span export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The library performs no I/O of its own apart from tracing export and theme
//! files. Every network call leaves the library as an [`Action::Dispatch`] and
//! its answer comes back as [`Event::StoreReply`].
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/staffboard.wasm" {
//!         api_base_url "http://localhost:8080"
//!         theme "staffboard-dark"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use staffboard::{handle_event, initialize, Action, Config, Event};
//!
//! let config = Config::from_zellij(&BTreeMap::new());
//! let mut state = initialize(&config);
//!
//! let (_, actions) = handle_event(&mut state, &Event::Mount)?;
//! let Action::Dispatch(request) = &actions[0] else { panic!("expected a request") };
//! assert_eq!(request.url, "http://localhost:8080/api/get-all-employees");
//! # Ok::<(), staffboard::StaffboardError>(())
//! ```

pub mod app;
pub mod client;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event};
pub use domain::{EmployeeFields, EmployeeId, EmployeeRecord, Field, FieldError, Result, StaffboardError};
pub use ui::Theme;

use std::collections::BTreeMap;

use client::{parse_base_url, RecordStoreClient};
use infrastructure::expand_tilde;
use url::Url;

/// Plugin configuration parsed from Zellij's configuration map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root URL of the record store, as accepted by [`parse_base_url`].
    pub api_base_url: Url,

    /// Built-in theme name; ignored if `theme_file` loads.
    pub theme_name: String,

    /// Path to a custom TOML theme file, `~` expanded under `/host`.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive, e.g. `info` or `staffboard=debug`.
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: RecordStoreClient::default().base_url().clone(),
            theme_name: ui::theme::DEFAULT_THEME.to_string(),
            theme_file: None,
            trace_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unknown keys are ignored. An `api_base_url` that [`parse_base_url`]
    /// rejects is logged and replaced by the default.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use staffboard::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_base_url".to_string(), "https://hr.example.com/".to_string());
    /// map.insert("theme_file".to_string(), "~/themes/hr.toml".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.api_base_url.as_str(), "https://hr.example.com/");
    /// assert_eq!(config.theme_file.as_deref(), Some("/host/themes/hr.toml"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| config.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());

        let api_base_url = match non_empty("api_base_url").map(parse_base_url) {
            Some(Ok(url)) => url,
            Some(Err(e)) => {
                tracing::warn!(error = %e, "invalid configuration, using default base url");
                defaults.api_base_url
            }
            None => defaults.api_base_url,
        };

        Self {
            api_base_url,
            theme_name: non_empty("theme").map_or(defaults.theme_name, String::from),
            theme_file: non_empty("theme_file").map(expand_tilde),
            trace_level: non_empty("trace_level").map_or(defaults.trace_level, String::from),
        }
    }
}

/// Builds the initial application state from configuration.
///
/// The theme is resolved file first, then by name, then the default. A theme
/// that fails to load is logged and skipped.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(api_base_url = %config.api_base_url, "initializing staffboard plugin");

    let from_file = config.theme_file.as_ref().and_then(|theme_file| {
        Theme::from_file(theme_file)
            .map_err(|e| tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme file"))
            .ok()
    });

    let theme = from_file.unwrap_or_else(|| {
        Theme::from_name(&config.theme_name).unwrap_or_else(|| {
            tracing::warn!(theme_name = %config.theme_name, "unknown theme, using default");
            Theme::default()
        })
    });

    AppState::new(RecordStoreClient::from_url(config.api_base_url.clone()), theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn invalid_base_url_falls_back() {
        let config = Config::from_zellij(&map(&[("api_base_url", "localhost:8080")]));
        assert_eq!(config.api_base_url.as_str(), "http://localhost:8080/");
    }

    #[test]
    fn base_url_with_query_falls_back_before_any_request_is_built() {
        let config = Config::from_zellij(&map(&[("api_base_url", "http://hr.example.com?tenant=1")]));
        let state = initialize(&config);

        assert_eq!(config.api_base_url, Config::default().api_base_url);
        assert_eq!(state.client().list().url, "http://localhost:8080/api/get-all-employees");
    }

    #[test]
    fn base_url_trailing_slashes_are_dropped() {
        let config = Config::from_zellij(&map(&[("api_base_url", "http://10.0.2.2:8080//")]));

        assert_eq!(config.api_base_url.as_str(), "http://10.0.2.2:8080/");
    }

    #[test]
    fn initialize_uses_named_theme_and_base_url() {
        let config = Config::from_zellij(&map(&[
            ("api_base_url", "https://hr.example.com"),
            ("theme", "staffboard-dark"),
        ]));
        let state = initialize(&config);

        assert_eq!(state.theme.name, "staffboard-dark");
        assert_eq!(state.client().base_url().as_str(), "https://hr.example.com/");
    }

    #[test]
    fn missing_theme_file_falls_back_to_name() {
        let config = Config {
            theme_file: Some("/nonexistent/theme.toml".into()),
            theme_name: "staffboard-dark".into(),
            ..Config::default()
        };

        assert_eq!(initialize(&config).theme.name, "staffboard-dark");
    }
}
