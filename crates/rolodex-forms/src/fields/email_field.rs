//! Email input.

use crate::field::{Field, FieldError, FieldStatus};
use crate::validators::EmailValidator;

/// An email field, optional by default.
///
/// An empty value passes unless the field was made required. Any
/// non-empty value, whitespace included, is checked against the email
/// pattern, so a blank-but-not-empty value is rejected as malformed
/// rather than treated as absent.
///
/// # Examples
///
/// ```
/// use rolodex_forms::{EmailField, Field};
///
/// let field = EmailField::new("email", "Email");
/// assert!(field.validate("").is_valid());
/// assert_eq!(
/// 	field.validate("not-an-email").message,
/// 	"Please enter a valid email address"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct EmailField {
	name: String,
	label: String,
	required: bool,
	validator: EmailValidator,
}

impl EmailField {
	/// Creates an optional email field.
	pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: label.into(),
			required: false,
			validator: EmailValidator::new(),
		}
	}

	/// Makes the field reject empty values.
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}
}

impl Field for EmailField {
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
		if value.is_empty() {
			if self.required {
				return FieldError::Required(self.label.clone()).into_status();
			}
			return FieldStatus::valid();
		}
		self.validator.validate(value).into()
	}
}
