//! # Rolodex
//!
//! State layer for a client and employee admin panel.
//!
//! Rolodex covers everything between the widgets and the record
//! service: declarative field rules with per-keystroke validation,
//! draft handling for create and edit dialogs, guarded submission that
//! cannot double-fire, and list state with search, pagination, and
//! confirmed deletes. Rendering and transport are left to the embedder;
//! the service is reached only through the injected
//! [`RecordApi`](admin::RecordApi) boundary.
//!
//! ## Feature Flags
//!
//! - `forms` - field descriptors, validators, schemas, and the draft
//!   controller
//! - `admin` - list, form, and notice state plus the record service
//!   boundary (implies `forms`)
//! - `full` (default) - everything
//!
//! ## Quick Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use rolodex::prelude::*;
//!
//! tokio_test::block_on(async {
//! 	let state = AppState::new(Arc::new(MemoryApi::new()));
//!
//! 	let form = state.open_create_form(RecordKind::Client);
//! 	form.set_field("firstName", "Ada").unwrap();
//!
//! 	// untouched required fields block the submission
//! 	assert_eq!(state.submit_form(&form).await, SubmitOutcome::Invalid);
//! 	assert_eq!(
//! 		form.field_status("phone").unwrap().message,
//! 		"Phone number is required"
//! 	);
//! });
//! ```

// Namespace modules
#[cfg(feature = "admin")]
pub mod admin;
#[cfg(feature = "forms")]
pub mod forms;

// Re-export the everyday types at the root
#[cfg(feature = "forms")]
pub use rolodex_forms::{Draft, Field, FieldStatus, RecordForm, RecordSchema, ValidationState};

#[cfg(feature = "admin")]
pub use rolodex_admin::{
	ApiError, AppState, FormState, ListState, MemoryApi, Record, RecordApi, RecordKind,
	SubmitOutcome,
};

/// Commonly used types, importable in one line.
pub mod prelude {
	#[cfg(feature = "forms")]
	pub use rolodex_forms::{
		Draft, Field, FieldStatus, FormError, RecordForm, RecordSchema, ValidationState,
	};

	#[cfg(feature = "admin")]
	pub use rolodex_admin::{
		ApiError, AppState, FormMode, FormState, ListState, MemoryApi, Notice, NoticeLevel,
		NoticeLog, Record, RecordApi, RecordKind, SubmitOutcome,
	};
}
