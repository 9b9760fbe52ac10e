//! State for one record list view.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use serde_json::Value;

use crate::api::RecordApi;
use crate::notice::NoticeLog;
use crate::records::{Record, RecordKind};

/// Rows shown per page unless the user picks another size.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A delete waiting for the user to confirm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
	pub id: String,
	/// Shown in the confirmation prompt.
	pub display_name: String,
}

struct ListInner {
	items: Vec<Record>,
	search: String,
	page: usize,
	page_size: usize,
	pending_delete: Option<PendingDelete>,
}

/// One record list with client-side search and pagination.
///
/// The list holds whatever the last successful fetch returned. A failed
/// refresh reports a notice and leaves the items as they were, stale or
/// empty. Search filters case-insensitively across the string values of
/// each record and snaps back to the first page whenever the query
/// changes. Deletes go through a confirm step and the list re-fetches
/// only after the service confirms, so nothing disappears
/// optimistically.
pub struct ListState {
	kind: RecordKind,
	api: Arc<dyn RecordApi>,
	notices: Arc<NoticeLog>,
	inner: Mutex<ListInner>,
	loading: AtomicBool,
}

impl ListState {
	/// Creates an empty list for one record kind.
	pub fn new(kind: RecordKind, api: Arc<dyn RecordApi>, notices: Arc<NoticeLog>) -> Arc<Self> {
		Arc::new(Self {
			kind,
			api,
			notices,
			inner: Mutex::new(ListInner {
				items: Vec::new(),
				search: String::new(),
				page: 1,
				page_size: DEFAULT_PAGE_SIZE,
				pending_delete: None,
			}),
			loading: AtomicBool::new(false),
		})
	}

	/// Returns the record kind this list shows.
	pub fn kind(&self) -> RecordKind {
		self.kind
	}

	/// Returns `true` while a fetch or delete is pending.
	pub fn is_loading(&self) -> bool {
		self.loading.load(Ordering::Acquire)
	}

	/// Re-fetches the list from the service.
	///
	/// On failure the current items stay as they were and the failure
	/// is reported as a notice.
	pub async fn refresh(&self) {
		self.loading.store(true, Ordering::Release);
		let result = self.api.fetch_list(self.kind).await;
		self.loading.store(false, Ordering::Release);

		match result {
			Ok(items) => {
				let mut inner = self.inner.lock();
				inner.items = items;
				clamp_page(&mut inner);
			}
			Err(error) => {
				tracing::error!(kind = %self.kind, %error, "list fetch failed");
				self.notices.error(format!("Failed to fetch {}", self.kind.plural()));
			}
		}
	}

	/// Returns every fetched record, unfiltered.
	pub fn items(&self) -> Vec<Record> {
		self.inner.lock().items.clone()
	}

	/// Returns the current search query.
	pub fn search(&self) -> String {
		self.inner.lock().search.clone()
	}

	/// Sets the search query and returns to the first page.
	pub fn set_search(&self, query: impl Into<String>) {
		let mut inner = self.inner.lock();
		inner.search = query.into();
		inner.page = 1;
	}

	/// Returns the current page, starting at 1.
	pub fn page(&self) -> usize {
		self.inner.lock().page
	}

	/// Returns the current page size.
	pub fn page_size(&self) -> usize {
		self.inner.lock().page_size
	}

	/// Changes the page size and returns to the first page.
	pub fn set_page_size(&self, page_size: usize) {
		let mut inner = self.inner.lock();
		inner.page_size = page_size.max(1);
		inner.page = 1;
	}

	/// Moves to `page`, clamped to the pages that exist.
	pub fn goto_page(&self, page: usize) {
		let mut inner = self.inner.lock();
		inner.page = page;
		clamp_page(&mut inner);
	}

	/// Counts the records matching the current search.
	pub fn matching_count(&self) -> usize {
		let inner = self.inner.lock();
		filtered(&inner).count()
	}

	/// Counts the pages the current search spans.
	pub fn page_count(&self) -> usize {
		let inner = self.inner.lock();
		filtered(&inner).count().div_ceil(inner.page_size)
	}

	/// Returns the records visible on the current page.
	pub fn visible(&self) -> Vec<Record> {
		let inner = self.inner.lock();
		let start = (inner.page - 1) * inner.page_size;
		filtered(&inner)
			.skip(start)
			.take(inner.page_size)
			.cloned()
			.collect()
	}

	/// Stages a delete for confirmation.
	///
	/// `display_name` appears in the prompt; without one the id is
	/// shown instead.
	pub fn request_delete(&self, id: impl Into<String>, display_name: Option<String>) {
		let id = id.into();
		let display_name = display_name.unwrap_or_else(|| format!("ID: {id}"));
		self.inner.lock().pending_delete = Some(PendingDelete { id, display_name });
	}

	/// Returns the delete currently awaiting confirmation.
	pub fn pending_delete(&self) -> Option<PendingDelete> {
		self.inner.lock().pending_delete.clone()
	}

	/// Drops the staged delete without touching the service.
	pub fn dismiss_delete(&self) {
		self.inner.lock().pending_delete = None;
	}

	/// Performs the staged delete.
	///
	/// Without a staged delete this is a no-op. On success the list
	/// re-fetches; on failure the items stay as they were.
	pub async fn confirm_delete(&self) {
		let Some(pending) = self.inner.lock().pending_delete.take() else {
			return;
		};

		self.loading.store(true, Ordering::Release);
		let result = self.api.delete_record(self.kind, &pending.id).await;
		self.loading.store(false, Ordering::Release);

		match result {
			Ok(()) => {
				self.notices
					.success(format!("{} deleted successfully", self.kind.label()));
				self.refresh().await;
			}
			Err(error) => {
				tracing::error!(kind = %self.kind, id = %pending.id, %error, "delete failed");
				self.notices.error(format!("Failed to delete {}", self.kind));
			}
		}
	}
}

fn filtered<'a>(inner: &'a ListInner) -> impl Iterator<Item = &'a Record> {
	inner
		.items
		.iter()
		.filter(move |record| matches_search(record, &inner.search))
}

fn matches_search(record: &Record, query: &str) -> bool {
	if query.is_empty() {
		return true;
	}
	let needle = query.to_lowercase();
	record.values().any(|value| match value {
		Value::String(s) => s.to_lowercase().contains(&needle),
		Value::Number(n) => n.to_string().contains(&needle),
		_ => false,
	})
}

fn clamp_page(inner: &mut ListInner) {
	let pages = inner
		.items
		.iter()
		.filter(|record| matches_search(record, &inner.search))
		.count()
		.div_ceil(inner.page_size);
	inner.page = inner.page.clamp(1, pages.max(1));
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use crate::memory::MemoryApi;

	use super::*;

	fn client(id: &str, first: &str, last: &str) -> Record {
		Record::from([
			("id".to_string(), json!(id)),
			("firstName".to_string(), json!(first)),
			("lastName".to_string(), json!(last)),
		])
	}

	fn seeded_list(count: usize) -> Arc<ListState> {
		let api = Arc::new(MemoryApi::new());
		let list = ListState::new(RecordKind::Client, api, Arc::new(NoticeLog::new()));
		let items = (1..=count)
			.map(|n| client(&n.to_string(), &format!("First{n}"), &format!("Last{n}")))
			.collect();
		list.inner.lock().items = items;
		list
	}

	#[test]
	fn test_search_filters_case_insensitively() {
		// Arrange
		let list = seeded_list(3);
		list.inner.lock().items.push(client("9", "Ada", "Lovelace"));

		// Act
		list.set_search("LOVE");

		// Assert
		let visible = list.visible();
		assert_eq!(visible.len(), 1);
		assert_eq!(visible[0]["firstName"], json!("Ada"));
	}

	#[test]
	fn test_search_change_returns_to_first_page() {
		// Arrange
		let list = seeded_list(25);
		list.goto_page(3);
		assert_eq!(list.page(), 3);

		// Act
		list.set_search("First");

		// Assert
		assert_eq!(list.page(), 1);
	}

	#[test]
	fn test_pagination_slices_by_page_size() {
		// Arrange
		let list = seeded_list(25);

		// Act & Assert: default size shows the first ten
		assert_eq!(list.visible().len(), 10);
		assert_eq!(list.page_count(), 3);

		// Act: the last page holds the remainder
		list.goto_page(3);
		assert_eq!(list.visible().len(), 5);
	}

	#[test]
	fn test_goto_page_clamps_to_existing_pages() {
		// Arrange
		let list = seeded_list(25);

		// Act
		list.goto_page(99);

		// Assert
		assert_eq!(list.page(), 3);

		// Act
		list.goto_page(0);

		// Assert
		assert_eq!(list.page(), 1);
	}

	#[test]
	fn test_set_page_size_returns_to_first_page() {
		// Arrange
		let list = seeded_list(25);
		list.goto_page(2);

		// Act
		list.set_page_size(5);

		// Assert
		assert_eq!(list.page(), 1);
		assert_eq!(list.page_count(), 5);
		assert_eq!(list.visible().len(), 5);
	}

	#[test]
	fn test_request_delete_falls_back_to_id_display() {
		// Arrange
		let list = seeded_list(1);

		// Act
		list.request_delete("7", None);

		// Assert
		assert_eq!(
			list.pending_delete(),
			Some(PendingDelete {
				id: "7".to_string(),
				display_name: "ID: 7".to_string(),
			})
		);

		// Act
		list.dismiss_delete();

		// Assert
		assert_eq!(list.pending_delete(), None);
	}

	#[test]
	fn test_matching_count_tracks_search() {
		// Arrange
		let list = seeded_list(12);

		// Act
		list.set_search("First1");

		// Assert: First1, First10, First11, First12
		assert_eq!(list.matching_count(), 4);
	}
}
