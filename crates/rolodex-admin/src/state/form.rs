//! State for one open create or edit dialog.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use rolodex_forms::{Draft, FieldStatus, FormResult, RecordForm, ValidationState};

use crate::api::{ApiError, RecordApi};
use crate::records::{Record, RecordKind, record_values};

/// Whether a form creates a new record or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
	Create,
	Edit { id: String },
}

/// Result of driving a submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
	/// The service accepted the draft. The form has reset and closed.
	Submitted(Record),
	/// The draft failed validation. Statuses now show every problem and
	/// the service was not called.
	Invalid,
	/// A previous submission is still pending; this one was ignored.
	InFlight,
	/// The form closed before the service answered, so the late result
	/// was dropped.
	Discarded,
	/// The service call failed. The form stays open with the draft
	/// intact for another attempt.
	Failed(ApiError),
}

/// One open record form.
///
/// Owns the draft and validation state for a single dialog and drives
/// submission against the record service. The form opens editing and
/// closes on cancel or on a submission the service accepted; a closed
/// form ignores everything, including a success that arrives late.
///
/// While a submission is pending, further [`submit`](Self::submit)
/// calls return [`SubmitOutcome::InFlight`] without touching the
/// service, so a double click cannot create a record twice.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use rolodex_admin::{FormState, MemoryApi, RecordKind, SubmitOutcome};
///
/// tokio_test::block_on(async {
/// 	let api = Arc::new(MemoryApi::new());
/// 	let form = FormState::create(RecordKind::Client, api);
///
/// 	form.set_field("firstName", "Ada").unwrap();
/// 	// required fields are still empty, so the service is not called
/// 	assert_eq!(form.submit().await, SubmitOutcome::Invalid);
/// 	assert!(form.is_open());
/// });
/// ```
pub struct FormState {
	kind: RecordKind,
	mode: FormMode,
	form: Mutex<RecordForm>,
	api: Arc<dyn RecordApi>,
	open: AtomicBool,
	in_flight: AtomicBool,
}

impl FormState {
	/// Opens a pristine create form.
	pub fn create(kind: RecordKind, api: Arc<dyn RecordApi>) -> Arc<Self> {
		let form = RecordForm::new(Arc::new(kind.schema()));
		Arc::new(Self {
			kind,
			mode: FormMode::Create,
			form: Mutex::new(form),
			api,
			open: AtomicBool::new(true),
			in_flight: AtomicBool::new(false),
		})
	}

	/// Opens an edit form prefilled from an existing record.
	///
	/// No errors show until the user touches a field or submits.
	pub fn edit(
		kind: RecordKind,
		id: impl Into<String>,
		record: &Record,
		api: Arc<dyn RecordApi>,
	) -> Arc<Self> {
		let form = RecordForm::prefilled(Arc::new(kind.schema()), &record_values(record));
		Arc::new(Self {
			kind,
			mode: FormMode::Edit { id: id.into() },
			form: Mutex::new(form),
			api,
			open: AtomicBool::new(true),
			in_flight: AtomicBool::new(false),
		})
	}

	/// Returns the record kind this form edits.
	pub fn kind(&self) -> RecordKind {
		self.kind
	}

	/// Returns whether the form creates or edits.
	pub fn mode(&self) -> &FormMode {
		&self.mode
	}

	/// Returns `true` until the form is closed by cancel or success.
	pub fn is_open(&self) -> bool {
		self.open.load(Ordering::Acquire)
	}

	/// Returns `true` while a submission is pending.
	pub fn is_submitting(&self) -> bool {
		self.in_flight.load(Ordering::Acquire)
	}

	/// Writes one field value and re-validates it.
	///
	/// A closed form ignores writes.
	pub fn set_field(&self, name: &str, value: impl Into<String>) -> FormResult<()> {
		if !self.is_open() {
			return Ok(());
		}
		self.form.lock().set_field(name, value)
	}

	/// Returns the current value of a field.
	pub fn value(&self, name: &str) -> Option<String> {
		self.form.lock().value(name).map(str::to_string)
	}

	/// Returns the current status of a field.
	pub fn field_status(&self, name: &str) -> Option<FieldStatus> {
		self.form.lock().field_status(name).cloned()
	}

	/// Returns a snapshot of the draft.
	pub fn draft(&self) -> Draft {
		self.form.lock().draft().clone()
	}

	/// Returns a snapshot of the validation state.
	pub fn validation_state(&self) -> ValidationState {
		self.form.lock().validation_state().clone()
	}

	/// Re-validates the whole draft and, if clean, sends it to the
	/// service.
	///
	/// Validation always runs against the current draft rather than the
	/// accumulated per-keystroke statuses, so fields the user never
	/// touched are judged too. On success the form resets and closes; on
	/// failure it stays open with the draft untouched.
	pub async fn submit(&self) -> SubmitOutcome {
		if !self.is_open() {
			return SubmitOutcome::Discarded;
		}
		if self
			.in_flight
			.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
			.is_err()
		{
			tracing::debug!(kind = %self.kind, "submit ignored, another is pending");
			return SubmitOutcome::InFlight;
		}

		let draft = {
			let mut form = self.form.lock();
			if !form.validate_all() {
				self.in_flight.store(false, Ordering::Release);
				return SubmitOutcome::Invalid;
			}
			form.draft().clone()
		};

		let result = match &self.mode {
			FormMode::Create => self.api.submit_record(self.kind, &draft).await,
			FormMode::Edit { id } => self.api.update_record(self.kind, id, &draft).await,
		};
		self.in_flight.store(false, Ordering::Release);

		match result {
			Ok(record) => {
				if !self.is_open() {
					tracing::debug!(kind = %self.kind, "dropping submission result for a closed form");
					return SubmitOutcome::Discarded;
				}
				self.form.lock().reset();
				self.open.store(false, Ordering::Release);
				tracing::debug!(kind = %self.kind, mode = ?self.mode, "record submitted");
				SubmitOutcome::Submitted(record)
			}
			Err(error) => {
				tracing::error!(kind = %self.kind, %error, "record submission failed");
				SubmitOutcome::Failed(error)
			}
		}
	}

	/// Resets the draft and closes the form without calling the
	/// service.
	///
	/// If a submission is pending, its eventual success is dropped.
	pub fn cancel(&self) {
		self.form.lock().reset();
		self.open.store(false, Ordering::Release);
		tracing::debug!(kind = %self.kind, "form cancelled");
	}

	/// Key identifying this form in the open-form registry.
	pub(crate) fn registry_key(&self) -> String {
		match &self.mode {
			FormMode::Create => format!("{}:create", self.kind),
			FormMode::Edit { id } => format!("{}:edit:{}", self.kind, id),
		}
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use crate::api::ApiError;
	use crate::memory::{ApiCall, MemoryApi};

	use super::*;

	fn fill_client(form: &FormState) {
		form.set_field("firstName", "Ada").unwrap();
		form.set_field("lastName", "Lovelace").unwrap();
		form.set_field("username", "ada").unwrap();
		form.set_field("phone", "0312345678").unwrap();
	}

	#[test]
	fn test_create_form_opens_pristine() {
		// Arrange & Act
		let form = FormState::create(RecordKind::Client, Arc::new(MemoryApi::new()));

		// Assert
		assert!(form.is_open());
		assert!(!form.is_submitting());
		assert!(form.draft().values().all(String::is_empty));
		assert!(form.validation_state().values().all(FieldStatus::is_valid));
	}

	#[test]
	fn test_set_field_rejects_unknown_names() {
		// Arrange
		let form = FormState::create(RecordKind::Client, Arc::new(MemoryApi::new()));

		// Act
		let result = form.set_field("role", "admin");

		// Assert
		assert!(result.is_err());
	}

	#[test]
	fn test_closed_form_ignores_writes() {
		// Arrange
		let form = FormState::create(RecordKind::Client, Arc::new(MemoryApi::new()));
		form.cancel();

		// Act
		form.set_field("firstName", "Ada").unwrap();

		// Assert
		assert_eq!(form.value("firstName").as_deref(), Some(""));
	}

	#[tokio::test]
	async fn test_submit_empty_draft_flags_required_fields_and_skips_service() {
		// Arrange
		let api = Arc::new(MemoryApi::new());
		let form = FormState::create(RecordKind::Client, api.clone());

		// Act
		let outcome = form.submit().await;

		// Assert
		assert_eq!(outcome, SubmitOutcome::Invalid);
		let state = form.validation_state();
		assert_eq!(state["firstName"].message, "First name is required");
		assert_eq!(state["lastName"].message, "Last name is required");
		assert_eq!(state["username"].message, "Username is required");
		assert_eq!(state["phone"].message, "Phone number is required");
		assert!(state["email"].is_valid());
		assert!(api.calls().is_empty());
		assert!(form.is_open());
	}

	#[tokio::test]
	async fn test_submit_valid_draft_calls_service_once_and_closes() {
		// Arrange
		let api = Arc::new(MemoryApi::new());
		let form = FormState::create(RecordKind::Client, api.clone());
		fill_client(&form);

		// Act
		let outcome = form.submit().await;

		// Assert
		let SubmitOutcome::Submitted(record) = outcome else {
			panic!("expected a submitted outcome");
		};
		assert_eq!(record["firstName"], json!("Ada"));
		assert!(record.contains_key("id"));
		assert!(!form.is_open());
		assert!(form.draft().values().all(String::is_empty));
		let calls = api.calls();
		assert_eq!(calls.len(), 1);
		let ApiCall::SubmitRecord { kind, draft } = &calls[0] else {
			panic!("expected a submit call");
		};
		assert_eq!(*kind, RecordKind::Client);
		assert_eq!(draft.get("firstName").map(String::as_str), Some("Ada"));
	}

	#[tokio::test]
	async fn test_failed_submit_keeps_draft_and_stays_open() {
		// Arrange
		let api = Arc::new(MemoryApi::new());
		api.fail_next(ApiError::Rejected {
			status: 500,
			message: "boom".to_string(),
		});
		let form = FormState::create(RecordKind::Client, api.clone());
		fill_client(&form);

		// Act
		let outcome = form.submit().await;

		// Assert
		assert!(matches!(outcome, SubmitOutcome::Failed(_)));
		assert!(form.is_open());
		assert_eq!(form.value("firstName").as_deref(), Some("Ada"));
		assert!(!form.is_submitting());

		// Act: the user retries and the service recovers
		assert!(matches!(form.submit().await, SubmitOutcome::Submitted(_)));
	}

	#[tokio::test]
	async fn test_cancel_resets_and_never_calls_service() {
		// Arrange
		let api = Arc::new(MemoryApi::new());
		let form = FormState::create(RecordKind::Client, api.clone());
		fill_client(&form);

		// Act
		form.cancel();

		// Assert
		assert!(!form.is_open());
		assert!(form.draft().values().all(String::is_empty));
		assert!(api.calls().is_empty());

		// Act: submit on the closed form stays a no-op
		assert_eq!(form.submit().await, SubmitOutcome::Discarded);
		assert!(api.calls().is_empty());
	}

	#[tokio::test]
	async fn test_edit_form_prefills_and_updates() {
		// Arrange
		let api = Arc::new(MemoryApi::new());
		let record = Record::from([
			("id".to_string(), json!("7")),
			("firstName".to_string(), json!("Ada")),
			("lastName".to_string(), json!("Lovelace")),
			("username".to_string(), json!("ada")),
			("phone".to_string(), json!("0312345678")),
		]);
		api.seed(RecordKind::Client, vec![record.clone()]);
		let form = FormState::edit(RecordKind::Client, "7", &record, api.clone());

		// Assert: prefilled without visible errors
		assert_eq!(form.value("firstName").as_deref(), Some("Ada"));
		assert!(form.validation_state().values().all(FieldStatus::is_valid));

		// Act
		form.set_field("firstName", "Augusta").unwrap();
		let outcome = form.submit().await;

		// Assert
		assert!(matches!(outcome, SubmitOutcome::Submitted(_)));
		let calls = api.calls();
		let ApiCall::UpdateRecord { id, draft, .. } = &calls[0] else {
			panic!("expected an update call");
		};
		assert_eq!(id, "7");
		assert_eq!(draft.get("firstName").map(String::as_str), Some("Augusta"));
		assert_eq!(api.stored(RecordKind::Client)[0]["firstName"], json!("Augusta"));
	}

	#[tokio::test]
	async fn test_edit_form_validates_like_create() {
		// Arrange
		let api = Arc::new(MemoryApi::new());
		let record = Record::from([
			("id".to_string(), json!("7")),
			("firstName".to_string(), json!("Ada")),
		]);
		let form = FormState::edit(RecordKind::Client, "7", &record, api.clone());

		// Act: blank out a required field and submit
		form.set_field("firstName", "").unwrap();
		let outcome = form.submit().await;

		// Assert
		assert_eq!(outcome, SubmitOutcome::Invalid);
		assert!(api.calls().is_empty());
	}
}
