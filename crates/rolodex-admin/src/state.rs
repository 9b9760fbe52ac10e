//! Shared state for the admin panel.
//!
//! [`AppState`] is the composition root: it owns one [`ListState`] per
//! record kind, a registry of open [`FormState`]s, and the notice log
//! everything reports to. The record service is injected once and
//! threaded through, never reached for as a global.

pub mod form;
pub mod list;

pub use form::{FormMode, FormState, SubmitOutcome};
pub use list::{DEFAULT_PAGE_SIZE, ListState, PendingDelete};

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::api::RecordApi;
use crate::notice::NoticeLog;
use crate::records::{Record, RecordKind, record_id};

/// Top-level panel state.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use rolodex_admin::{AppState, MemoryApi, RecordKind, SubmitOutcome};
///
/// tokio_test::block_on(async {
/// 	let state = AppState::new(Arc::new(MemoryApi::new()));
///
/// 	let form = state.open_create_form(RecordKind::Client);
/// 	form.set_field("firstName", "Ada").unwrap();
/// 	form.set_field("lastName", "Lovelace").unwrap();
/// 	form.set_field("username", "ada").unwrap();
/// 	form.set_field("phone", "0312345678").unwrap();
///
/// 	let outcome = state.submit_form(&form).await;
/// 	assert!(matches!(outcome, SubmitOutcome::Submitted(_)));
/// 	// the list refreshed after the service confirmed
/// 	assert_eq!(state.list(RecordKind::Client).items().len(), 1);
/// });
/// ```
pub struct AppState {
	api: Arc<dyn RecordApi>,
	notices: Arc<NoticeLog>,
	clients: Arc<ListState>,
	employees: Arc<ListState>,
	forms: Mutex<HashMap<String, Arc<FormState>>>,
}

impl AppState {
	/// Builds panel state on top of a record service.
	pub fn new(api: Arc<dyn RecordApi>) -> Arc<Self> {
		let notices = Arc::new(NoticeLog::new());
		Arc::new(Self {
			clients: ListState::new(RecordKind::Client, api.clone(), notices.clone()),
			employees: ListState::new(RecordKind::Employee, api.clone(), notices.clone()),
			forms: Mutex::new(HashMap::new()),
			api,
			notices,
		})
	}

	/// Returns the shared notice log.
	pub fn notices(&self) -> &NoticeLog {
		&self.notices
	}

	/// Returns the list for one record kind.
	pub fn list(&self, kind: RecordKind) -> Arc<ListState> {
		match kind {
			RecordKind::Client => self.clients.clone(),
			RecordKind::Employee => self.employees.clone(),
		}
	}

	/// Refreshes every list, typically at startup.
	pub async fn refresh_all(&self) {
		self.clients.refresh().await;
		self.employees.refresh().await;
	}

	/// Returns the open create form for `kind`, opening one if needed.
	///
	/// While a create form stays open, repeated calls return the same
	/// instance so its draft survives the dialog being re-rendered.
	pub fn open_create_form(&self, kind: RecordKind) -> Arc<FormState> {
		let mut forms = self.forms.lock();
		let key = format!("{kind}:create");
		if let Some(existing) = forms.get(&key) {
			if existing.is_open() {
				return existing.clone();
			}
		}
		let form = FormState::create(kind, self.api.clone());
		forms.insert(key, form.clone());
		form
	}

	/// Returns an open edit form for `record`, opening one if needed.
	///
	/// Returns `None` when the record carries no id to edit under.
	pub fn open_edit_form(&self, kind: RecordKind, record: &Record) -> Option<Arc<FormState>> {
		let id = record_id(record)?.to_string();
		let mut forms = self.forms.lock();
		let key = format!("{kind}:edit:{id}");
		if let Some(existing) = forms.get(&key) {
			if existing.is_open() {
				return Some(existing.clone());
			}
		}
		let form = FormState::edit(kind, id, record, self.api.clone());
		forms.insert(key, form.clone());
		Some(form)
	}

	/// Cancels a form and drops it from the registry.
	pub fn close_form(&self, form: &FormState) {
		form.cancel();
		self.forms.lock().remove(&form.registry_key());
	}

	/// Submits a form and runs the follow-through.
	///
	/// On an accepted submission this reports a success notice,
	/// retires the form, and refreshes the matching list. A failure
	/// reports an error notice and leaves the form open. Validation
	/// misses, ignored double submits, and discarded late results pass
	/// through silently.
	pub async fn submit_form(&self, form: &FormState) -> SubmitOutcome {
		let outcome = form.submit().await;
		match &outcome {
			SubmitOutcome::Submitted(_) => {
				let message = match form.mode() {
					FormMode::Create => format!("{} added successfully", form.kind().label()),
					FormMode::Edit { .. } => format!("{} updated successfully", form.kind().label()),
				};
				self.notices.success(message);
				self.forms.lock().remove(&form.registry_key());
				self.list(form.kind()).refresh().await;
			}
			SubmitOutcome::Failed(_) => {
				let message = match form.mode() {
					FormMode::Create => format!("Failed to add {}", form.kind()),
					FormMode::Edit { .. } => format!("Failed to update {}", form.kind()),
				};
				self.notices.error(message);
			}
			SubmitOutcome::Invalid | SubmitOutcome::InFlight | SubmitOutcome::Discarded => {}
		}
		outcome
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use crate::memory::MemoryApi;

	use super::*;

	#[test]
	fn test_open_create_form_reuses_the_open_instance() {
		// Arrange
		let state = AppState::new(Arc::new(MemoryApi::new()));

		// Act
		let first = state.open_create_form(RecordKind::Client);
		first.set_field("firstName", "Ada").unwrap();
		let second = state.open_create_form(RecordKind::Client);

		// Assert
		assert!(Arc::ptr_eq(&first, &second));
		assert_eq!(second.value("firstName").as_deref(), Some("Ada"));
	}

	#[test]
	fn test_open_create_form_replaces_a_closed_instance() {
		// Arrange
		let state = AppState::new(Arc::new(MemoryApi::new()));
		let first = state.open_create_form(RecordKind::Client);
		state.close_form(&first);

		// Act
		let second = state.open_create_form(RecordKind::Client);

		// Assert
		assert!(!Arc::ptr_eq(&first, &second));
		assert!(second.is_open());
	}

	#[test]
	fn test_create_forms_are_tracked_per_kind() {
		// Arrange
		let state = AppState::new(Arc::new(MemoryApi::new()));

		// Act
		let client = state.open_create_form(RecordKind::Client);
		let employee = state.open_create_form(RecordKind::Employee);

		// Assert
		assert!(!Arc::ptr_eq(&client, &employee));
		assert!(client.field_status("password").is_none());
		assert!(employee.field_status("password").is_some());
	}

	#[test]
	fn test_open_edit_form_requires_an_id() {
		// Arrange
		let state = AppState::new(Arc::new(MemoryApi::new()));
		let without_id = Record::from([("firstName".to_string(), json!("Ada"))]);
		let with_id = Record::from([
			("id".to_string(), json!("7")),
			("firstName".to_string(), json!("Ada")),
		]);

		// Act & Assert
		assert!(state.open_edit_form(RecordKind::Client, &without_id).is_none());
		let form = state.open_edit_form(RecordKind::Client, &with_id).unwrap();
		assert_eq!(form.mode(), &FormMode::Edit { id: "7".to_string() });
	}

	#[test]
	fn test_edit_forms_are_tracked_per_record() {
		// Arrange
		let state = AppState::new(Arc::new(MemoryApi::new()));
		let seven = Record::from([("id".to_string(), json!("7"))]);
		let eight = Record::from([("id".to_string(), json!("8"))]);

		// Act
		let first = state.open_edit_form(RecordKind::Client, &seven).unwrap();
		let second = state.open_edit_form(RecordKind::Client, &eight).unwrap();
		let first_again = state.open_edit_form(RecordKind::Client, &seven).unwrap();

		// Assert
		assert!(!Arc::ptr_eq(&first, &second));
		assert!(Arc::ptr_eq(&first, &first_again));
	}
}
