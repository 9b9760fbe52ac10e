//! Plain text input.

use crate::field::{Field, FieldError, FieldStatus};

/// A free-form text field, required by default.
///
/// A required text field rejects values that are empty after trimming,
/// so whitespace-only input does not pass. Non-empty values are accepted
/// as-is.
///
/// # Examples
///
/// ```
/// use rolodex_forms::{Field, TextField};
///
/// let field = TextField::new("firstName", "First name");
/// assert_eq!(
/// 	field.validate("   ").message,
/// 	"First name is required"
/// );
/// assert!(field.validate("Ada").is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct TextField {
	name: String,
	label: String,
	required: bool,
}

impl TextField {
	/// Creates a required text field.
	pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: label.into(),
			required: true,
		}
	}

	/// Makes the field accept empty values.
	pub fn optional(mut self) -> Self {
		self.required = false;
		self
	}
}

impl Field for TextField {
	fn name(&self) -> &str {
		&self.name
	}

	fn label(&self) -> &str {
		&self.label
	}

	fn required(&self) -> bool {
		self.required
	}

	fn validate(&self, value: &str) -> FieldStatus {
		if self.required && value.trim().is_empty() {
			return FieldError::Required(self.label.clone()).into_status();
		}
		FieldStatus::valid()
	}
}
