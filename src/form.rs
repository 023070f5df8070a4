//! Register/edit form state and the submission flow.
//!
//! Submitting runs validation first, then date composition, and only then
//! hands a payload to the store. Create and edit share this flow; the
//! presence of an employee id selects update over create.

use thiserror::Error;

use crate::date::{self, DateError};
use crate::error::StoreError;
use crate::models::{Employee, EmployeeDraft, EmployeePayload};
use crate::notify::{Notification, Notifier};
use crate::store::EmployeeStore;
use crate::validation::{self, ValidationResult};

pub const EMPLOYEE_ADDED: &str = "Employee added successfully!";
pub const EMPLOYEE_UPDATED: &str = "Employee updated successfully!";
pub const ADD_FAILED: &str = "Failed to add employee";
pub const UPDATE_FAILED: &str = "Failed to update employee";
pub const LOAD_FAILED: &str = "Failed to load employee data";
pub const INVALID_STORED_DATE: &str = "Invalid date format in employee data";

/// A validated request ready for the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(EmployeePayload),
    Update { id: i64, payload: EmployeePayload },
}

impl Submission {
    pub fn payload(&self) -> &EmployeePayload {
        match self {
            Submission::Create(payload) | Submission::Update { payload, .. } => payload,
        }
    }
}

/// Why a draft was not sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{}", .0.joined(", "))]
    Invalid(ValidationResult),

    #[error(transparent)]
    Date(#[from] DateError),

    #[error("A save is already in progress")]
    InFlight,
}

/// Validate `draft`, compose its start date and build the request.
///
/// On success the composed timestamp is stored in `draft.start_date`.
pub fn prepare_submission(draft: &mut EmployeeDraft, id: Option<i64>) -> Result<Submission, SubmitError> {
    let report = validation::validate(draft);

    // A valid report guarantees complete pickers
    let (true, Some(day), Some(month), Some(year)) = (report.is_valid(), draft.day, draft.month.as_deref(), draft.year)
    else {
        return Err(SubmitError::Invalid(report));
    };

    let start_date = match date::compose(day, month, year) {
        Ok(ts) => ts,
        Err(e) => {
            draft.start_date = None;
            return Err(e.into());
        }
    };
    draft.start_date = Some(start_date.clone());

    let payload = draft.to_payload(start_date);
    Ok(match id {
        Some(id) => Submission::Update { id, payload },
        None => Submission::Create(payload),
    })
}

/// Send a prepared submission and report the outcome through `notifier`.
///
/// Success does not depend on the backend echoing the saved record.
pub async fn send_submission<S, N>(
    store: &S,
    notifier: &N,
    submission: &Submission,
) -> Result<Option<Employee>, StoreError>
where
    S: EmployeeStore,
    N: Notifier,
{
    let (result, success, fallback) = match submission {
        Submission::Create(payload) => {
            tracing::info!("Creating employee '{}'", payload.name);
            (store.create(payload).await, EMPLOYEE_ADDED, ADD_FAILED)
        }
        Submission::Update { id, payload } => {
            tracing::info!("Updating employee {} ('{}')", id, payload.name);
            (store.update(*id, payload).await, EMPLOYEE_UPDATED, UPDATE_FAILED)
        }
    };

    match &result {
        Ok(_) => notifier.notify(Notification::success(success)),
        Err(e) => {
            tracing::warn!("{}: {}", fallback, e);
            notifier.notify(Notification::error(e.user_message(fallback)));
        }
    }

    result
}

/// Fetch a record and turn it into an editable draft.
///
/// A stored date that cannot be parsed is reported but still yields a
/// draft, with empty date pickers.
pub async fn load_draft<S, N>(store: &S, notifier: &N, id: i64) -> Option<EmployeeDraft>
where
    S: EmployeeStore,
    N: Notifier,
{
    match store.get(id).await {
        Ok(emp) => {
            let mut draft = EmployeeDraft::from_record(&emp);
            if let Err(e) = draft.load_start_date(emp.start_date.as_deref()) {
                tracing::warn!("Employee {}: {}", id, e);
                notifier.notify(Notification::error(INVALID_STORED_DATE));
            }
            Some(draft)
        }
        Err(e) => {
            tracing::warn!("Failed to load employee {}: {}", id, e);
            notifier.notify(Notification::error(e.user_message(LOAD_FAILED)));
            None
        }
    }
}

/// State of the register/edit form.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub draft: EmployeeDraft,
    employee_id: Option<i64>,
    loading: bool,
    submitting: bool,
}

impl FormState {
    /// Empty form for adding an employee.
    pub fn create() -> Self {
        Self::default()
    }

    /// Form for editing `id`; the draft arrives later via [`Self::loaded`].
    pub fn edit(id: i64) -> Self {
        Self {
            employee_id: Some(id),
            loading: true,
            ..Default::default()
        }
    }

    pub fn employee_id(&self) -> Option<i64> {
        self.employee_id
    }

    pub fn is_editing(&self) -> bool {
        self.employee_id.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Install a fetched draft. `None` keeps the current (empty) draft.
    pub fn loaded(&mut self, draft: Option<EmployeeDraft>) {
        if let Some(draft) = draft {
            self.draft = draft;
        }
        self.loading = false;
    }

    /// Prepare a submission unless one is already in flight.
    pub fn begin_submit(&mut self) -> Result<Submission, SubmitError> {
        if self.submitting {
            return Err(SubmitError::InFlight);
        }
        let submission = prepare_submission(&mut self.draft, self.employee_id)?;
        self.submitting = true;
        Ok(submission)
    }

    /// Mark the in-flight submission as finished.
    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }
}
