//! Field descriptor trait and per-field validation outcomes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised by a field or validator when a value is rejected.
///
/// The `Display` implementation produces the exact message shown next to
/// the input in the UI, so variants format without any extra decoration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
	/// A required field was left empty. Carries the field label.
	#[error("{0} is required")]
	Required(String),
	/// The value was present but failed a validator check.
	#[error("{0}")]
	Invalid(String),
}

impl FieldError {
	/// Converts the error into a display status carrying its message.
	pub fn into_status(self) -> FieldStatus {
		FieldStatus::invalid(self.to_string())
	}
}

/// Result alias used by validators.
pub type FieldResult<T> = Result<T, FieldError>;

/// Outcome of validating a single field value.
///
/// A clean status has `is_error = false` and an empty message. An error
/// status carries the user-facing message verbatim.
///
/// # Examples
///
/// ```
/// use rolodex_forms::FieldStatus;
///
/// let ok = FieldStatus::valid();
/// assert!(ok.is_valid());
/// assert_eq!(ok.message, "");
///
/// let bad = FieldStatus::invalid("Phone number is required");
/// assert!(bad.is_error);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldStatus {
	/// Whether the value was rejected.
	pub is_error: bool,
	/// User-facing message. Empty when the value passed.
	pub message: String,
}

impl FieldStatus {
	/// Status for a value that passed validation.
	pub fn valid() -> Self {
		Self {
			is_error: false,
			message: String::new(),
		}
	}

	/// Status for a rejected value with the given message.
	pub fn invalid(message: impl Into<String>) -> Self {
		Self {
			is_error: true,
			message: message.into(),
		}
	}

	/// Returns `true` when the value passed validation.
	pub fn is_valid(&self) -> bool {
		!self.is_error
	}
}

impl Default for FieldStatus {
	fn default() -> Self {
		Self::valid()
	}
}

impl From<FieldResult<()>> for FieldStatus {
	fn from(result: FieldResult<()>) -> Self {
		match result {
			Ok(()) => Self::valid(),
			Err(err) => Self::invalid(err.to_string()),
		}
	}
}

/// A single field descriptor in a record schema.
///
/// Implementations are stateless. They describe one input of a form
/// (its name, label, and requiredness) and know how to judge a raw
/// string value for it. Values always arrive as strings because drafts
/// mirror what the user typed, digit fields included.
pub trait Field: Send + Sync {
	/// Draft key, e.g. `"firstName"`.
	fn name(&self) -> &str;

	/// Human-readable label used in messages, e.g. `"First name"`.
	fn label(&self) -> &str;

	/// Whether an empty value is rejected.
	fn required(&self) -> bool;

	/// Validates a raw value and returns the status to display.
	fn validate(&self, value: &str) -> FieldStatus;
}
