//! Employee list controller.
//!
//! Owns the fetched collection, its load status and one [`DeleteFlow`] per row
//! that currently has a delete dialog open. A successful fetch replaces the
//! collection wholesale; a failed fetch only changes the status, keeping
//! whatever was shown before.
//!
//! Delete dialogs are driven through the row-keyed `on_*_delete` methods. The
//! only path from a delete back to a fetch is [`ListController::on_acknowledge_result`]
//! after a successful delete.

use crate::app::deletion::{DeleteEffect, DeleteFlow, DeleteIntent, DeleteOutcome, SequencerError};
use crate::client::{Outcome, RecordStoreClient, StoreRequest};
use crate::domain::{EmployeeId, EmployeeRecord};
use std::collections::HashMap;

/// Load status of the collection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Error(String),
}

/// The list controller's state snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionView {
    pub records: Vec<EmployeeRecord>,
    pub status: LoadStatus,
    /// Unix timestamp (seconds) of the last successful fetch.
    pub loaded_at: Option<i64>,
}

/// Controller behind the employee list screen.
#[derive(Debug, Clone)]
pub struct ListController {
    view: CollectionView,
    deletions: HashMap<EmployeeId, DeleteFlow>,
    client: RecordStoreClient,
}

impl ListController {
    #[must_use]
    pub fn new(client: RecordStoreClient) -> Self {
        Self {
            view: CollectionView::default(),
            deletions: HashMap::new(),
            client,
        }
    }

    #[must_use]
    pub const fn view(&self) -> &CollectionView {
        &self.view
    }

    #[must_use]
    pub fn records(&self) -> &[EmployeeRecord] {
        &self.view.records
    }

    #[must_use]
    pub const fn status(&self) -> &LoadStatus {
        &self.view.status
    }

    /// Marks the collection as loading and returns the fetch request.
    pub fn load(&mut self) -> StoreRequest {
        tracing::debug!(previous = ?self.view.status, "loading employees");
        self.view.status = LoadStatus::Loading;
        self.client.list()
    }

    /// Fetches again after a failure; identical to [`ListController::load`].
    pub fn retry(&mut self) -> StoreRequest {
        self.load()
    }

    /// Applies the result of a fetch.
    pub fn on_list_reply(&mut self, outcome: Outcome<Vec<EmployeeRecord>>) {
        match outcome {
            Outcome::Ok(records) => {
                tracing::debug!(count = records.len(), "employees loaded");
                self.view.records = records;
                self.view.status = LoadStatus::Idle;
                self.view.loaded_at = Some(chrono::Utc::now().timestamp());
            }
            Outcome::Failed(reason) => {
                tracing::warn!(reason = %reason, kept = self.view.records.len(), "employee load failed");
                self.view.status = LoadStatus::Error(reason);
            }
        }
    }

    /// Delete dialog state of `id`; rows without a dialog are `Closed`.
    #[must_use]
    pub fn delete_flow(&self, id: &EmployeeId) -> &DeleteFlow {
        const CLOSED: &DeleteFlow = &DeleteFlow::Closed;
        self.deletions.get(id).unwrap_or(CLOSED)
    }

    /// The row whose delete dialog is open, if any.
    ///
    /// A row showing its result takes precedence over one awaiting confirmation.
    #[must_use]
    pub fn open_dialog(&self) -> Option<(&EmployeeId, &DeleteFlow)> {
        let rank = |flow: &DeleteFlow| match flow {
            DeleteFlow::ResultShown(_) => 3,
            DeleteFlow::InFlight => 2,
            DeleteFlow::ConfirmPending => 1,
            DeleteFlow::Closed => 0,
        };
        self.deletions
            .iter()
            .filter(|(_, flow)| flow.is_open())
            .max_by(|(a_id, a), (b_id, b)| rank(a).cmp(&rank(b)).then_with(|| b_id.cmp(a_id)))
    }

    /// Display name of a listed employee.
    #[must_use]
    pub fn name_of(&self, id: &EmployeeId) -> Option<&str> {
        self.view
            .records
            .iter()
            .find(|record| &record.id == id)
            .map(|record| record.name.as_str())
    }

    /// Opens the delete confirmation for a listed row.
    ///
    /// # Errors
    ///
    /// Fails if the row is not listed or already has a dialog open.
    pub fn on_request_delete(&mut self, id: &EmployeeId) -> Result<(), SequencerError> {
        if self.name_of(id).is_none() {
            return Err(SequencerError::UnknownRow(id.clone()));
        }
        self.deletions.entry(id.clone()).or_default().request()?;
        Ok(())
    }

    /// Dismisses the confirmation without contacting the store.
    ///
    /// # Errors
    ///
    /// Fails unless the row is awaiting confirmation.
    pub fn on_cancel_delete(&mut self, id: &EmployeeId) -> Result<(), SequencerError> {
        self.flow_mut(id, DeleteIntent::Cancel)?.cancel()?;
        self.deletions.remove(id);
        Ok(())
    }

    /// Confirms the delete and returns the request to dispatch.
    ///
    /// # Errors
    ///
    /// Fails unless the row is awaiting confirmation.
    pub fn on_confirm_delete(&mut self, id: &EmployeeId) -> Result<StoreRequest, SequencerError> {
        match self.flow_mut(id, DeleteIntent::Confirm)?.confirm()? {
            DeleteEffect::SendDelete => Ok(self.client.delete(id)),
            effect => {
                tracing::debug!(effect = ?effect, "confirm produced no request");
                Err(SequencerError::InvalidTransition {
                    intent: DeleteIntent::Confirm,
                    state: self.delete_flow(id).state_name(),
                })
            }
        }
    }

    /// Records the store's answer to a delete.
    ///
    /// The row itself is left in place; it disappears only with the refresh
    /// that follows acknowledgment.
    ///
    /// # Errors
    ///
    /// Fails if no delete is in flight for `id`; such replies are stale.
    pub fn on_delete_reply(&mut self, id: &EmployeeId, outcome: Outcome<()>) -> Result<(), SequencerError> {
        let result = match outcome {
            Outcome::Ok(()) => DeleteOutcome::Deleted {
                name: self.name_of(id).map_or_else(|| id.to_string(), str::to_string),
            },
            Outcome::Failed(reason) => DeleteOutcome::Failed { reason },
        };
        self.flow_mut(id, DeleteIntent::Complete)?.complete(result)?;
        Ok(())
    }

    /// Closes the result dialog.
    ///
    /// Returns the refresh request when, and only when, the delete succeeded.
    ///
    /// # Errors
    ///
    /// Fails unless the row is showing a result.
    pub fn on_acknowledge_result(&mut self, id: &EmployeeId) -> Result<Option<StoreRequest>, SequencerError> {
        let effect = self.flow_mut(id, DeleteIntent::Acknowledge)?.acknowledge()?;
        self.deletions.remove(id);
        Ok(match effect {
            DeleteEffect::Refresh => Some(self.load()),
            DeleteEffect::None | DeleteEffect::SendDelete => None,
        })
    }

    /// The flow of a row, which must have a dialog open to accept `intent`.
    fn flow_mut(&mut self, id: &EmployeeId, intent: DeleteIntent) -> Result<&mut DeleteFlow, SequencerError> {
        self.deletions
            .get_mut(id)
            .ok_or(SequencerError::InvalidTransition {
                intent,
                state: DeleteFlow::Closed.state_name(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{HttpMethod, RequestTag};

    fn record(id: &str, name: &str) -> EmployeeRecord {
        EmployeeRecord {
            id: EmployeeId::new(id),
            name: name.into(),
            email: format!("{}@example.com", name.to_lowercase()),
            department: "Eng".into(),
            salary: 1000.0,
            age: 30,
        }
    }

    fn loaded(records: Vec<EmployeeRecord>) -> ListController {
        let mut list = ListController::new(RecordStoreClient::default());
        list.load();
        list.on_list_reply(Outcome::Ok(records));
        list
    }

    #[test]
    fn load_marks_loading_and_fetches_the_collection() {
        let mut list = ListController::new(RecordStoreClient::default());
        let request = list.load();

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.tag, RequestTag::List);
        assert_eq!(list.status(), &LoadStatus::Loading);
    }

    #[test]
    fn successful_load_replaces_records() {
        let mut list = loaded(vec![record("1", "Ada"), record("2", "Bo")]);
        list.load();
        list.on_list_reply(Outcome::Ok(vec![record("3", "Cy")]));

        assert_eq!(list.records(), &[record("3", "Cy")]);
        assert_eq!(list.status(), &LoadStatus::Idle);
        assert!(list.view().loaded_at.is_some());
    }

    #[test]
    fn failed_load_keeps_previous_records() {
        let mut list = loaded(vec![record("1", "Ada")]);
        list.retry();
        list.on_list_reply(Outcome::Failed("connection refused".into()));

        assert_eq!(list.records(), &[record("1", "Ada")]);
        assert_eq!(list.status(), &LoadStatus::Error("connection refused".into()));
    }

    #[test]
    fn successful_delete_refreshes_only_after_acknowledgment() {
        let mut list = loaded(vec![record("7", "Ada")]);
        let id = EmployeeId::new("7");

        list.on_request_delete(&id).unwrap();
        let request = list.on_confirm_delete(&id).unwrap();
        assert_eq!(request.method, HttpMethod::Delete);

        list.on_delete_reply(&id, Outcome::Ok(())).unwrap();
        assert_eq!(list.status(), &LoadStatus::Idle);
        assert_eq!(list.records().len(), 1);
        assert_eq!(
            list.delete_flow(&id),
            &DeleteFlow::ResultShown(DeleteOutcome::Deleted { name: "Ada".into() })
        );

        let refresh = list.on_acknowledge_result(&id).unwrap();
        assert_eq!(refresh.map(|r| r.tag), Some(RequestTag::List));
        assert_eq!(list.status(), &LoadStatus::Loading);
        assert_eq!(list.delete_flow(&id), &DeleteFlow::Closed);
    }

    #[test]
    fn failed_delete_keeps_row_and_skips_refresh() {
        let mut list = loaded(vec![record("7", "Ada")]);
        let id = EmployeeId::new("7");

        list.on_request_delete(&id).unwrap();
        list.on_confirm_delete(&id).unwrap();
        list.on_delete_reply(&id, Outcome::Failed("status 404".into())).unwrap();
        assert_eq!(
            list.delete_flow(&id),
            &DeleteFlow::ResultShown(DeleteOutcome::Failed { reason: "status 404".into() })
        );

        assert_eq!(list.on_acknowledge_result(&id).unwrap(), None);
        assert_eq!(list.status(), &LoadStatus::Idle);
        assert!(list.records().iter().any(|r| r.id == id));
    }

    #[test]
    fn cancel_sends_nothing_and_closes() {
        let mut list = loaded(vec![record("1", "Ada")]);
        let id = EmployeeId::new("1");

        list.on_request_delete(&id).unwrap();
        list.on_cancel_delete(&id).unwrap();

        assert!(list.open_dialog().is_none());
    }

    #[test]
    fn unknown_rows_and_stale_replies_are_rejected() {
        let mut list = loaded(vec![record("1", "Ada")]);

        assert_eq!(
            list.on_request_delete(&EmployeeId::new("9")),
            Err(SequencerError::UnknownRow(EmployeeId::new("9")))
        );
        assert!(list.on_delete_reply(&EmployeeId::new("1"), Outcome::Ok(())).is_err());
    }

    #[test]
    fn rows_delete_independently() {
        let mut list = loaded(vec![record("1", "Ada"), record("2", "Bo")]);
        let (ada, bo) = (EmployeeId::new("1"), EmployeeId::new("2"));

        list.on_request_delete(&ada).unwrap();
        list.on_confirm_delete(&ada).unwrap();
        list.on_request_delete(&bo).unwrap();

        assert_eq!(list.delete_flow(&ada), &DeleteFlow::InFlight);
        assert_eq!(list.delete_flow(&bo), &DeleteFlow::ConfirmPending);
        assert_eq!(list.open_dialog().map(|(id, _)| id.clone()), Some(ada));
    }
}
