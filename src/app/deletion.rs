//! Per-row delete confirmation state machine.
//!
//! ```text
//! Closed ──request──► ConfirmPending ──confirm──► InFlight ──complete──► ResultShown
//!   ▲                       │                                                 │
//!   └────────cancel─────────┘◄──────────────────acknowledge───────────────────┘
//! ```
//!
//! Each transition returns the [`DeleteEffect`] the owner must carry out. The
//! list refresh is the effect of acknowledging a *successful* result and of
//! nothing else, so the row stays on screen while the result dialog is open
//! and stays for good if the delete failed.
//!
//! # Example
//!
//! ```
//! use staffboard::app::deletion::{DeleteEffect, DeleteFlow, DeleteOutcome};
//!
//! let mut flow = DeleteFlow::default();
//! flow.request().unwrap();
//! assert_eq!(flow.confirm().unwrap(), DeleteEffect::SendDelete);
//! flow.complete(DeleteOutcome::Deleted { name: "Ada".into() }).unwrap();
//! assert_eq!(flow.acknowledge().unwrap(), DeleteEffect::Refresh);
//! assert_eq!(flow, DeleteFlow::Closed);
//! ```

use crate::domain::EmployeeId;
use std::fmt;
use thiserror::Error;

/// Result of one finished delete, as shown in the result dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The store removed the row; `name` is the employee's display name.
    Deleted { name: String },
    /// The store refused or the request failed.
    Failed { reason: String },
}

impl DeleteOutcome {
    /// Text of the result dialog.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Deleted { name } => format!("{name}'s data has been deleted successfully!"),
            Self::Failed { reason } => format!("Failed to delete employee: {reason}"),
        }
    }
}

/// Delete dialog state of a single row. `Closed` is the resting state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeleteFlow {
    #[default]
    Closed,
    ConfirmPending,
    InFlight,
    ResultShown(DeleteOutcome),
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteEffect {
    None,
    SendDelete,
    Refresh,
}

/// Intent a [`DeleteFlow`] can receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteIntent {
    Request,
    Cancel,
    Confirm,
    Complete,
    Acknowledge,
}

impl fmt::Display for DeleteIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Request => "request",
            Self::Cancel => "cancel",
            Self::Confirm => "confirm",
            Self::Complete => "complete",
            Self::Acknowledge => "acknowledge",
        })
    }
}

/// Rejected delete-dialog intent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequencerError {
    #[error("cannot {intent} a delete while {state}")]
    InvalidTransition { intent: DeleteIntent, state: &'static str },

    #[error("no employee with id {0} is listed")]
    UnknownRow(EmployeeId),
}

impl DeleteFlow {
    #[must_use]
    pub const fn state_name(&self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::ConfirmPending => "awaiting confirmation",
            Self::InFlight => "in flight",
            Self::ResultShown(_) => "showing a result",
        }
    }

    /// True while a dialog for this row is on screen.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Opens the confirmation dialog.
    ///
    /// # Errors
    ///
    /// Fails unless the flow is `Closed`.
    pub fn request(&mut self) -> Result<DeleteEffect, SequencerError> {
        self.step(DeleteIntent::Request, |flow| match flow {
            Self::Closed => Some((Self::ConfirmPending, DeleteEffect::None)),
            _ => None,
        })
    }

    /// Dismisses the confirmation dialog without contacting the store.
    ///
    /// # Errors
    ///
    /// Fails unless the flow is `ConfirmPending`; in particular a delete that
    /// is already in flight cannot be cancelled.
    pub fn cancel(&mut self) -> Result<DeleteEffect, SequencerError> {
        self.step(DeleteIntent::Cancel, |flow| match flow {
            Self::ConfirmPending => Some((Self::Closed, DeleteEffect::None)),
            _ => None,
        })
    }

    /// Confirms the delete; the owner must send the delete request.
    ///
    /// # Errors
    ///
    /// Fails unless the flow is `ConfirmPending`.
    pub fn confirm(&mut self) -> Result<DeleteEffect, SequencerError> {
        self.step(DeleteIntent::Confirm, |flow| match flow {
            Self::ConfirmPending => Some((Self::InFlight, DeleteEffect::SendDelete)),
            _ => None,
        })
    }

    /// Records the store's answer and shows it.
    ///
    /// # Errors
    ///
    /// Fails unless the flow is `InFlight`.
    pub fn complete(&mut self, outcome: DeleteOutcome) -> Result<DeleteEffect, SequencerError> {
        self.step(DeleteIntent::Complete, move |flow| match flow {
            Self::InFlight => Some((Self::ResultShown(outcome), DeleteEffect::None)),
            _ => None,
        })
    }

    /// Closes the result dialog, requesting a refresh only after a successful delete.
    ///
    /// # Errors
    ///
    /// Fails unless the flow is `ResultShown`.
    pub fn acknowledge(&mut self) -> Result<DeleteEffect, SequencerError> {
        self.step(DeleteIntent::Acknowledge, |flow| match flow {
            Self::ResultShown(DeleteOutcome::Deleted { .. }) => Some((Self::Closed, DeleteEffect::Refresh)),
            Self::ResultShown(DeleteOutcome::Failed { .. }) => Some((Self::Closed, DeleteEffect::None)),
            _ => None,
        })
    }

    fn step(
        &mut self,
        intent: DeleteIntent,
        transition: impl FnOnce(&Self) -> Option<(Self, DeleteEffect)>,
    ) -> Result<DeleteEffect, SequencerError> {
        let Some((next, effect)) = transition(self) else {
            return Err(SequencerError::InvalidTransition {
                intent,
                state: self.state_name(),
            });
        };
        tracing::debug!(
            intent = %intent,
            from = self.state_name(),
            to = next.state_name(),
            effect = ?effect,
            "delete flow transition"
        );
        *self = next;
        Ok(effect)
    }
}
