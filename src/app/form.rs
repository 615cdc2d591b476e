//! Create/edit form controller.
//!
//! A [`FormController`] owns one [`Draft`] for the lifetime of a form screen.
//! Field edits are truncated and validated immediately. Submitting revalidates
//! every field, and only a fully valid draft turns into a create or update
//! request. The store's answer is held as a notification until the user
//! acknowledges it.
//!
//! # State machine
//!
//! ```text
//! Editing ──submit (valid)──► Submitting ──Ok──────► SubmitSucceeded ──ack──► (leave form)
//!    ▲  └─submit (invalid)─┐              └─Failed──► SubmitFailed ──ack──┐
//!    └─────────────────────┴──────────────────────────────────────────────┘
//! ```
//!
//! Validation happens synchronously inside [`FormController::on_submit`], so
//! there is no resting "validating" phase.

use crate::app::modes::FormMode;
use crate::client::{Outcome, RecordStoreClient, StoreRequest};
use crate::domain::validator::{parse_age, parse_salary};
use crate::domain::{validate, EmployeeFields, EmployeeRecord, Field, FieldError};
use std::collections::BTreeMap;

/// Raw form input plus the current error of each field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    values: BTreeMap<Field, String>,
    errors: BTreeMap<Field, FieldError>,
}

impl Draft {
    /// Draft pre-filled from an existing record. Identity is not part of it.
    #[must_use]
    pub fn from_record(record: &EmployeeRecord) -> Self {
        let fields = record.fields();
        let mut draft = Self::default();
        draft.values.insert(Field::Name, fields.name);
        draft.values.insert(Field::Email, fields.email);
        draft.values.insert(Field::Department, fields.department);
        draft.values.insert(Field::Salary, fields.salary.to_string());
        draft.values.insert(Field::Age, fields.age.to_string());
        draft
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    #[must_use]
    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    #[must_use]
    pub const fn errors(&self) -> &BTreeMap<Field, FieldError> {
        &self.errors
    }

    fn set(&mut self, field: Field, value: String) {
        match validate(field, &value) {
            Some(error) => self.errors.insert(field, error),
            None => self.errors.remove(&field),
        };
        self.values.insert(field, value);
    }

    /// Validates every field from scratch, replacing the error map.
    fn revalidate(&mut self) -> bool {
        self.errors = Field::ALL
            .into_iter()
            .filter_map(|field| validate(field, self.value(field)).map(|e| (field, e)))
            .collect();
        self.errors.is_empty()
    }

    /// Coerces a valid draft into a request body.
    fn to_fields(&self) -> Result<EmployeeFields, FieldError> {
        Ok(EmployeeFields {
            name: self.value(Field::Name).to_string(),
            email: self.value(Field::Email).to_string(),
            department: self.value(Field::Department).to_string(),
            salary: parse_salary(self.value(Field::Salary))?,
            age: parse_age(self.value(Field::Age))?,
        })
    }
}

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting,
    SubmitSucceeded { message: String },
    SubmitFailed { reason: String },
}

/// What the owner should do after a notification is acknowledged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormExit {
    Stay,
    ReturnToList,
}

/// Controller behind one create or edit form.
#[derive(Debug, Clone)]
pub struct FormController {
    mode: FormMode,
    draft: Draft,
    phase: FormPhase,
    session: u64,
    client: RecordStoreClient,
}

impl FormController {
    /// Form with an empty draft that will create a new employee.
    #[must_use]
    pub fn create(client: RecordStoreClient, session: u64) -> Self {
        Self::with(FormMode::Create, Draft::default(), client, session)
    }

    /// Form pre-filled from `record` that will update it in place.
    #[must_use]
    pub fn edit(record: &EmployeeRecord, client: RecordStoreClient, session: u64) -> Self {
        Self::with(FormMode::Edit(record.id.clone()), Draft::from_record(record), client, session)
    }

    fn with(mode: FormMode, draft: Draft, client: RecordStoreClient, session: u64) -> Self {
        tracing::debug!(mode = ?mode, session, "form opened");
        Self {
            mode,
            draft,
            phase: FormPhase::Editing,
            session,
            client,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> &FormMode {
        &self.mode
    }

    #[must_use]
    pub const fn draft(&self) -> &Draft {
        &self.draft
    }

    #[must_use]
    pub const fn phase(&self) -> &FormPhase {
        &self.phase
    }

    /// Stamp carried by this form's save requests.
    #[must_use]
    pub const fn session(&self) -> u64 {
        self.session
    }

    /// True while a save request is outstanding.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        matches!(self.phase, FormPhase::Submitting)
    }

    /// Text of the result dialog, if one is showing.
    #[must_use]
    pub fn notification(&self) -> Option<String> {
        match &self.phase {
            FormPhase::SubmitSucceeded { message } => Some(message.clone()),
            FormPhase::SubmitFailed { reason } => Some(format!("Failed to save employee: {reason}")),
            FormPhase::Editing | FormPhase::Submitting => None,
        }
    }

    /// Applies an edit to one field.
    ///
    /// The value is truncated to the field's limit and validated; its error is
    /// set or cleared accordingly. Returns `false` when the edit was ignored
    /// because a result dialog is showing.
    pub fn on_field_change(&mut self, field: Field, raw: &str) -> bool {
        if !matches!(self.phase, FormPhase::Editing | FormPhase::Submitting) {
            tracing::debug!(field = %field, "ignoring edit while a result is shown");
            return false;
        }
        self.draft.set(field, field.truncate(raw));
        true
    }

    /// Submits the draft.
    ///
    /// Returns the save request to dispatch, or `None` when nothing may be sent:
    /// the draft has errors (now all shown), a save is already in flight, or a
    /// result dialog is open.
    pub fn on_submit(&mut self) -> Option<StoreRequest> {
        if self.phase != FormPhase::Editing {
            tracing::debug!(phase = ?self.phase, "submit ignored");
            return None;
        }

        if !self.draft.revalidate() {
            tracing::debug!(errors = ?self.draft.errors, "submit blocked by validation");
            return None;
        }

        let request = self
            .draft
            .to_fields()
            .map_err(|e| e.to_string())
            .and_then(|fields| {
                let built = match &self.mode {
                    FormMode::Create => self.client.create(&fields, self.session),
                    FormMode::Edit(id) => self.client.update(id, &fields, self.session),
                };
                built.map_err(|e| e.to_string())
            });

        match request {
            Ok(request) => {
                tracing::debug!(mode = ?self.mode, "submitting employee");
                self.phase = FormPhase::Submitting;
                Some(request)
            }
            Err(reason) => {
                tracing::warn!(reason = %reason, "could not build save request");
                self.phase = FormPhase::SubmitFailed { reason };
                None
            }
        }
    }

    /// Records the store's answer to the outstanding save.
    ///
    /// Returns `false` if no save was outstanding.
    pub fn on_save_reply(&mut self, outcome: Outcome<Option<EmployeeRecord>>) -> bool {
        if !self.is_busy() {
            tracing::debug!(phase = ?self.phase, "discarding unexpected save reply");
            return false;
        }

        self.phase = match outcome {
            Outcome::Ok(_) => {
                let message = match self.mode {
                    FormMode::Create => "Employee added successfully!",
                    FormMode::Edit(_) => "Employee updated successfully!",
                };
                FormPhase::SubmitSucceeded { message: message.to_string() }
            }
            Outcome::Failed(reason) => FormPhase::SubmitFailed { reason },
        };
        tracing::debug!(phase = ?self.phase, "save completed");
        true
    }

    /// Dismisses the result dialog.
    pub fn on_acknowledge(&mut self) -> FormExit {
        match self.phase {
            FormPhase::SubmitSucceeded { .. } => FormExit::ReturnToList,
            FormPhase::SubmitFailed { .. } => {
                self.phase = FormPhase::Editing;
                FormExit::Stay
            }
            FormPhase::Editing | FormPhase::Submitting => FormExit::Stay,
        }
    }
}
