//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after each event. Actions are the
//! only way state changes reach the outside world: the runtime performs the
//! HTTP request of a [`Action::Dispatch`] and later feeds the reply back as
//! [`crate::app::Event::StoreReply`].
//!
//! # Example
//!
//! ```
//! use staffboard::app::Action;
//! use staffboard::client::RecordStoreClient;
//!
//! let client = RecordStoreClient::default();
//! let actions = vec![Action::Dispatch(client.list())];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::client::StoreRequest;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly requests to exit the plugin (e.g., pressing 'q').
    CloseFocus,

    /// Performs a record store request without blocking.
    ///
    /// The runtime must pass the request's context map through unchanged so the
    /// reply can be matched to the controller that asked.
    Dispatch(StoreRequest),
}
