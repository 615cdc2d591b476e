//! Error types for the Staffboard plugin.
//!
//! This module defines the centralized error type [`StaffboardError`] and a type alias
//! [`Result`] used throughout the plugin. Remote request failures are deliberately
//! absent: those are ordinary outcomes carried by [`crate::client::Outcome`], never
//! errors. What remains are programming-level faults such as an unknown field name
//! or a dialog transition the current state does not allow.

use crate::app::deletion::SequencerError;
use thiserror::Error;

/// The main error type for Staffboard operations.
///
/// # Examples
///
/// ```
/// use staffboard::StaffboardError;
///
/// fn load_theme() -> Result<(), StaffboardError> {
///     Err(StaffboardError::Theme("unknown palette".to_string()))
/// }
///
/// assert!(load_theme().is_err());
/// ```
#[derive(Debug, Error)]
pub enum StaffboardError {
    /// A field name did not match any editable employee field.
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// A delete dialog intent arrived in a state that cannot accept it.
    #[error(transparent)]
    Sequencer(#[from] SequencerError),

    /// A request body could not be encoded as JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Staffboard operations.
pub type Result<T> = std::result::Result<T, StaffboardError>;
