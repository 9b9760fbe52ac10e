//! Phone number input.

use crate::field::{Field, FieldError, FieldStatus};
use crate::validators::PhoneValidator;

/// A required phone number field.
///
/// Empty values are rejected with a required message; everything else
/// must be exactly 10 or 11 digits with no separators.
///
/// # Examples
///
/// ```
/// use rolodex_forms::{Field, PhoneField};
///
/// let field = PhoneField::new("phone", "Phone number");
/// assert_eq!(field.validate("").message, "Phone number is required");
/// assert_eq!(
/// 	field.validate("12-34").message,
/// 	"Please enter a valid phone number (10-11 digits)"
/// );
/// assert!(field.validate("09012345678").is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct PhoneField {
	name: String,
	label: String,
	validator: PhoneValidator,
}

impl PhoneField {
	/// Creates a required phone field.
	pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: label.into(),
			validator: PhoneValidator::new(),
		}
	}
}

impl Field for PhoneField {
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

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[test]
	fn test_phone_rejects_empty_with_required_message() {
		// Arrange
		let field = PhoneField::new("phone", "Phone number");

		// Act
		let status = field.validate("");

		// Assert
		assert!(status.is_error);
		assert_eq!(status.message, "Phone number is required");
	}

	#[rstest]
	#[case("1234567890")]
	#[case("12345678901")]
	fn test_phone_accepts_10_and_11_digit_values(#[case] value: &str) {
		// Arrange
		let field = PhoneField::new("phone", "Phone number");

		// Act & Assert
		assert!(field.validate(value).is_valid());
	}

	#[rstest]
	#[case("123456789")]
	#[case("123456789012")]
	#[case("12 34567890")]
	#[case("(03)12345678")]
	fn test_phone_rejects_wrong_shapes_with_format_message(#[case] value: &str) {
		// Arrange
		let field = PhoneField::new("phone", "Phone number");

		// Act
		let status = field.validate(value);

		// Assert
		assert!(status.is_error);
		assert_eq!(status.message, "Please enter a valid phone number (10-11 digits)");
	}
}
