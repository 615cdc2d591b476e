//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the domain and
//! client layers. Controllers own their state; the handler routes intents and
//! store replies to them and collects the requests they emit.
//!
//! # Architecture
//!
//! ```text
//! Keys / Web Results → Events → Event Handler → Controller Updates → Actions → HTTP
//!                                    ↑                                   ↓
//!                                    └────────── Store Replies ──────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`deletion`]: Per-row delete confirmation state machine
//! - [`form`]: Create/edit form controller
//! - [`handler`]: Event processing and reply routing
//! - [`list`]: Employee collection controller
//! - [`modes`]: Screen and form mode types
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```
//! use staffboard::app::{handle_event, AppState, Event};
//! use staffboard::client::RecordStoreClient;
//! use staffboard::ui::Theme;
//!
//! let mut state = AppState::new(RecordStoreClient::default(), Theme::default());
//! let (_render, actions) = handle_event(&mut state, &Event::OpenCreateForm)?;
//! assert!(actions.is_empty());
//! # Ok::<(), staffboard::StaffboardError>(())
//! ```

pub mod actions;
pub mod deletion;
pub mod form;
pub mod handler;
pub mod list;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use deletion::{DeleteEffect, DeleteFlow, DeleteIntent, DeleteOutcome, SequencerError};
pub use form::{Draft, FormController, FormExit, FormPhase};
pub use handler::{handle_event, Event};
pub use list::{CollectionView, ListController, LoadStatus};
pub use modes::{FormMode, Screen};
pub use state::AppState;
