//! The record service boundary.
//!
//! Everything the panel knows about persistence goes through
//! [`RecordApi`]. State types take an `Arc<dyn RecordApi>` so tests and
//! embedders choose the transport; [`MemoryApi`](crate::MemoryApi) is
//! the in-process implementation.

use async_trait::async_trait;
use thiserror::Error;

use rolodex_forms::Draft;

use crate::records::{Record, RecordKind};

/// Failure of a record service call.
///
/// One shape covers every operation; which operation failed is carried
/// by the call site (submission failures keep the form open, fetch
/// failures leave the list as it was).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
	/// The service could not be reached.
	#[error("network error: {0}")]
	Network(String),
	/// The service answered with a failure status.
	#[error("request rejected ({status}): {message}")]
	Rejected { status: u16, message: String },
	/// The service answered with a payload that could not be read.
	#[error("malformed response: {0}")]
	Decode(String),
}

/// Result alias for record service calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Async interface to the record service.
///
/// Implementations must be safe to call from multiple tasks; all
/// methods take `&self`.
#[async_trait]
pub trait RecordApi: Send + Sync {
	/// Fetches the current records of one kind, in service order.
	async fn fetch_list(&self, kind: RecordKind) -> ApiResult<Vec<Record>>;

	/// Creates a record from a validated draft.
	///
	/// Returns the stored record, id included.
	async fn submit_record(&self, kind: RecordKind, draft: &Draft) -> ApiResult<Record>;

	/// Applies draft values to an existing record.
	///
	/// The draft may be partial; fields it does not mention keep their
	/// stored values. Returns the updated record.
	async fn update_record(&self, kind: RecordKind, id: &str, draft: &Draft) -> ApiResult<Record>;

	/// Deletes a record by id.
	async fn delete_record(&self, kind: RecordKind, id: &str) -> ApiResult<()>;
}
