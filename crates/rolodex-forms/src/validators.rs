//! Reusable value validators shared by the built-in field types.
//!
//! Each validator is a small configurable struct with a `validate` method
//! returning [`FieldResult`]. Default messages match what the admin UI
//! displays, and `with_message` swaps in a custom one.

use std::sync::LazyLock;

use regex::Regex;

use crate::field::{FieldError, FieldResult};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex")
});

static PHONE_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^\d{10,11}$").expect("Failed to compile phone regex"));

/// Validates that a value looks like an email address.
///
/// The check is deliberately loose: one `@`, no whitespace, and a dot
/// somewhere in the domain part. Anything stricter rejects addresses
/// that mail servers accept.
///
/// # Examples
///
/// ```
/// use rolodex_forms::EmailValidator;
///
/// let validator = EmailValidator::new();
/// assert!(validator.validate("ada@example.com").is_ok());
/// assert!(validator.validate("not-an-email").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct EmailValidator {
	message: Option<String>,
}

impl EmailValidator {
	/// Creates a validator with the default message.
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Overrides the rejection message.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	/// Checks `value` against the email pattern.
	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if EMAIL_REGEX.is_match(value) {
			Ok(())
		} else {
			let message = self
				.message
				.clone()
				.unwrap_or_else(|| "Please enter a valid email address".to_string());
			Err(FieldError::Invalid(message))
		}
	}
}

impl Default for EmailValidator {
	fn default() -> Self {
		Self::new()
	}
}

/// Validates that a value is a bare 10 or 11 digit phone number.
///
/// Formatting characters are rejected rather than stripped, matching the
/// digit-only inputs the record forms collect.
///
/// # Examples
///
/// ```
/// use rolodex_forms::PhoneValidator;
///
/// let validator = PhoneValidator::new();
/// assert!(validator.validate("09012345678").is_ok());
/// assert!(validator.validate("090-1234-5678").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PhoneValidator {
	message: Option<String>,
}

impl PhoneValidator {
	/// Creates a validator with the default message.
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Overrides the rejection message.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	/// Checks `value` against the digit-count pattern.
	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if PHONE_REGEX.is_match(value) {
			Ok(())
		} else {
			let message = self
				.message
				.clone()
				.unwrap_or_else(|| "Please enter a valid phone number (10-11 digits)".to_string());
			Err(FieldError::Invalid(message))
		}
	}
}

impl Default for PhoneValidator {
	fn default() -> Self {
		Self::new()
	}
}

/// Validates that a value has at least `min` characters.
///
/// Length is counted in characters, not bytes, so multibyte input is
/// not penalized.
///
/// # Examples
///
/// ```
/// use rolodex_forms::MinLengthValidator;
///
/// let validator = MinLengthValidator::new(6);
/// assert!(validator.validate("hunter2").is_ok());
/// assert!(validator.validate("abc").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MinLengthValidator {
	min: usize,
	message: Option<String>,
}

impl MinLengthValidator {
	/// Creates a validator requiring at least `min` characters.
	pub fn new(min: usize) -> Self {
		Self { min, message: None }
	}

	/// Overrides the rejection message.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	/// Checks the character count of `value`.
	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if value.chars().count() >= self.min {
			Ok(())
		} else {
			let message = self
				.message
				.clone()
				.unwrap_or_else(|| format!("Must be at least {} characters", self.min));
			Err(FieldError::Invalid(message))
		}
	}
}
