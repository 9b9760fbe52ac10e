//! Admin panel state
//!
//! List, form, and notice state plus the record service boundary,
//! reachable through the `rolodex::admin` namespace.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use rolodex::admin::{AppState, MemoryApi, RecordKind};
//!
//! tokio_test::block_on(async {
//! 	let state = AppState::new(Arc::new(MemoryApi::new()));
//! 	state.refresh_all().await;
//! 	assert!(state.list(RecordKind::Client).items().is_empty());
//! });
//! ```

pub use rolodex_admin::*;
