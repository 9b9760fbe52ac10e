//! State layer for the rolodex admin panel.
//!
//! The panel manages clients and employees. This crate holds everything
//! between the widgets and the record service: per-kind list state with
//! search and pagination, open form state with validated drafts and
//! guarded submission, a shared notice log, and the [`RecordApi`]
//! boundary the whole layer talks through. Field rules themselves come
//! from `rolodex-forms`.
//!
//! [`AppState`] wires the pieces together; [`MemoryApi`] is the
//! in-process service used by tests and demos.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use rolodex_admin::{AppState, MemoryApi, RecordKind};
//!
//! tokio_test::block_on(async {
//! 	let state = AppState::new(Arc::new(MemoryApi::new()));
//! 	state.refresh_all().await;
//!
//! 	let clients = state.list(RecordKind::Client);
//! 	assert!(clients.items().is_empty());
//! });
//! ```

pub mod api;
pub mod memory;
pub mod notice;
pub mod records;
pub mod state;

pub use api::{ApiError, ApiResult, RecordApi};
pub use memory::{ApiCall, MemoryApi, ResponseGate};
pub use notice::{Notice, NoticeLevel, NoticeLog};
pub use records::{Record, RecordKind, record_id, record_values};
pub use state::{
	AppState, DEFAULT_PAGE_SIZE, FormMode, FormState, ListState, PendingDelete, SubmitOutcome,
};
