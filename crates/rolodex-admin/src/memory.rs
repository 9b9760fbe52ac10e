//! In-memory record service for tests and local demos.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use tokio::sync::Notify;

use rolodex_forms::Draft;

use crate::api::{ApiError, ApiResult, RecordApi};
use crate::records::{Record, RecordKind, record_id};

/// One observed service call, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
	FetchList {
		kind: RecordKind,
	},
	SubmitRecord {
		kind: RecordKind,
		draft: Draft,
	},
	UpdateRecord {
		kind: RecordKind,
		id: String,
		draft: Draft,
	},
	DeleteRecord {
		kind: RecordKind,
		id: String,
	},
}

/// Handle to responses paused by [`MemoryApi::hold_responses`].
///
/// While the gate is held, every service call records its journal entry
/// and then waits. [`release`](Self::release) lets the waiting calls
/// finish and turns the gate off for later calls.
#[derive(Clone)]
pub struct ResponseGate {
	notify: Arc<Notify>,
	slot: Arc<Mutex<Option<Arc<Notify>>>>,
}

impl ResponseGate {
	/// Releases every waiting call and stops gating new ones.
	pub fn release(&self) {
		*self.slot.lock() = None;
		self.notify.notify_waiters();
	}
}

/// [`RecordApi`] backed by process memory.
///
/// Records live in per-kind vectors and ids are assigned sequentially.
/// Every call is journaled for assertions, queued failures replace the
/// next call's response, and [`hold_responses`](Self::hold_responses)
/// keeps calls pending so tests can interleave operations
/// deterministically.
///
/// # Examples
///
/// ```
/// use rolodex_admin::{MemoryApi, RecordApi, RecordKind};
/// use rolodex_forms::Draft;
///
/// let api = MemoryApi::new();
/// let draft = Draft::from([("firstName".to_string(), "Ada".to_string())]);
///
/// let record = tokio_test::block_on(api.submit_record(RecordKind::Client, &draft)).unwrap();
/// assert_eq!(record["firstName"], serde_json::json!("Ada"));
/// assert!(record.contains_key("id"));
/// ```
#[derive(Default)]
pub struct MemoryApi {
	records: Mutex<HashMap<RecordKind, Vec<Record>>>,
	next_id: AtomicU64,
	calls: Mutex<Vec<ApiCall>>,
	failures: Mutex<VecDeque<ApiError>>,
	gate: Arc<Mutex<Option<Arc<Notify>>>>,
}

impl MemoryApi {
	/// Creates an empty service.
	pub fn new() -> Self {
		Self::default()
	}

	/// Replaces the stored records of one kind.
	///
	/// Seeded ids are taken as-is; generated ids continue from the
	/// service's own counter.
	pub fn seed(&self, kind: RecordKind, records: Vec<Record>) {
		self.records.lock().insert(kind, records);
	}

	/// Queues an error to be returned by the next call, in place of its
	/// normal response. Queue multiple errors to fail several calls.
	pub fn fail_next(&self, error: ApiError) {
		self.failures.lock().push_back(error);
	}

	/// Pauses responses until the returned gate is released.
	pub fn hold_responses(&self) -> ResponseGate {
		let notify = Arc::new(Notify::new());
		*self.gate.lock() = Some(notify.clone());
		ResponseGate {
			notify,
			slot: self.gate.clone(),
		}
	}

	/// Returns the journaled calls in arrival order.
	pub fn calls(&self) -> Vec<ApiCall> {
		self.calls.lock().clone()
	}

	/// Counts journaled `submit_record` calls.
	pub fn submit_count(&self) -> usize {
		self.calls
			.lock()
			.iter()
			.filter(|call| matches!(call, ApiCall::SubmitRecord { .. }))
			.count()
	}

	/// Returns the stored records of one kind.
	pub fn stored(&self, kind: RecordKind) -> Vec<Record> {
		self.records.lock().get(&kind).cloned().unwrap_or_default()
	}

	async fn pass_gate(&self) {
		let Some(notify) = self.gate.lock().clone() else {
			return;
		};
		let notified = notify.notified();
		tokio::pin!(notified);
		// Register before re-checking so a release between the check and
		// the await cannot be missed.
		notified.as_mut().enable();
		if self.gate.lock().is_none() {
			return;
		}
		notified.await;
	}

	fn journal(&self, call: ApiCall) {
		self.calls.lock().push(call);
	}

	fn take_failure(&self) -> Option<ApiError> {
		self.failures.lock().pop_front()
	}

	fn draft_record(&self, draft: &Draft) -> Record {
		let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
		let mut record: Record = draft
			.iter()
			.map(|(name, value)| (name.clone(), Value::String(value.clone())))
			.collect();
		record.insert("id".to_string(), Value::String(id.to_string()));
		record
	}
}

#[async_trait]
impl RecordApi for MemoryApi {
	async fn fetch_list(&self, kind: RecordKind) -> ApiResult<Vec<Record>> {
		self.journal(ApiCall::FetchList { kind });
		self.pass_gate().await;
		if let Some(error) = self.take_failure() {
			return Err(error);
		}
		Ok(self.stored(kind))
	}

	async fn submit_record(&self, kind: RecordKind, draft: &Draft) -> ApiResult<Record> {
		self.journal(ApiCall::SubmitRecord {
			kind,
			draft: draft.clone(),
		});
		self.pass_gate().await;
		if let Some(error) = self.take_failure() {
			return Err(error);
		}
		let record = self.draft_record(draft);
		self.records.lock().entry(kind).or_default().push(record.clone());
		Ok(record)
	}

	async fn update_record(&self, kind: RecordKind, id: &str, draft: &Draft) -> ApiResult<Record> {
		self.journal(ApiCall::UpdateRecord {
			kind,
			id: id.to_string(),
			draft: draft.clone(),
		});
		self.pass_gate().await;
		if let Some(error) = self.take_failure() {
			return Err(error);
		}
		let mut records = self.records.lock();
		let list = records.entry(kind).or_default();
		let Some(record) = list.iter_mut().find(|record| record_id(record) == Some(id)) else {
			return Err(ApiError::Rejected {
				status: 404,
				message: format!("no {kind} with id {id}"),
			});
		};
		for (name, value) in draft {
			record.insert(name.clone(), Value::String(value.clone()));
		}
		Ok(record.clone())
	}

	async fn delete_record(&self, kind: RecordKind, id: &str) -> ApiResult<()> {
		self.journal(ApiCall::DeleteRecord {
			kind,
			id: id.to_string(),
		});
		self.pass_gate().await;
		if let Some(error) = self.take_failure() {
			return Err(error);
		}
		let mut records = self.records.lock();
		let list = records.entry(kind).or_default();
		let before = list.len();
		list.retain(|record| record_id(record) != Some(id));
		if list.len() == before {
			return Err(ApiError::Rejected {
				status: 404,
				message: format!("no {kind} with id {id}"),
			});
		}
		Ok(())
	}
}
