//! Password input.

use crate::field::{Field, FieldError, FieldStatus};
use crate::validators::MinLengthValidator;

/// A required password field with a minimum length.
///
/// Empty values get the required message; shorter-than-minimum values
/// get a length message built from the label and the limit. The default
/// minimum is 6 characters.
///
/// # Examples
///
/// ```
/// use rolodex_forms::{Field, PasswordField};
///
/// let field = PasswordField::new("password", "Password");
/// assert_eq!(field.validate("").message, "Password is required");
/// assert_eq!(
/// 	field.validate("abc").message,
/// 	"Password must be at least 6 characters"
/// );
/// assert!(field.validate("hunter2").is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct PasswordField {
	name: String,
	label: String,
	min_length: usize,
	validator: MinLengthValidator,
}

impl PasswordField {
	/// Creates a required password field with a 6 character minimum.
	pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
		let name = name.into();
		let label = label.into();
		let min_length = 6;
		Self {
			validator: Self::length_validator(&label, min_length),
			name,
			label,
			min_length,
		}
	}

	/// Changes the minimum length and rebuilds the length message.
	pub fn with_min_length(mut self, min_length: usize) -> Self {
		self.min_length = min_length;
		self.validator = Self::length_validator(&self.label, min_length);
		self
	}

	fn length_validator(label: &str, min_length: usize) -> MinLengthValidator {
		MinLengthValidator::new(min_length)
			.with_message(format!("{label} must be at least {min_length} characters"))
	}
}

impl Field for PasswordField {
	fn name(&self) -> &str {
		&self.name
	}

	fn label(&self) -> &str {
		&self.label
	}

	fn required(&self) -> bool {
		true
	}

	fn validate(&self, value: &str) -> FieldStatus {
		if value.is_empty() {
			return FieldError::Required(self.label.clone()).into_status();
		}
		self.validator.validate(value).into()
	}
}
