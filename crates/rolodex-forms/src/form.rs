//! Draft editing with per-keystroke validation.

use std::sync::Arc;

use thiserror::Error;

use crate::field::FieldStatus;
use crate::schema::{Draft, RecordSchema, ValidationState};

/// Error raised when form input does not match the schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
	/// A write targeted a field the schema does not declare.
	#[error("Unknown field '{0}'")]
	UnknownField(String),
}

/// Result alias for form operations.
pub type FormResult<T> = Result<T, FormError>;

/// A draft record under edit, paired with its validation state.
///
/// The form keeps one value and one [`FieldStatus`] per schema field at
/// all times. Writing a value re-validates that field immediately, the
/// way the admin UI flags mistakes as the user types. [`validate_all`]
/// re-judges the whole draft before submission, and [`reset`] returns
/// the form to its pristine state.
///
/// [`validate_all`]: RecordForm::validate_all
/// [`reset`]: RecordForm::reset
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use rolodex_forms::{PhoneField, RecordForm, RecordSchema, TextField};
///
/// let mut schema = RecordSchema::new();
/// schema.add_field(Box::new(TextField::new("firstName", "First name")));
/// schema.add_field(Box::new(PhoneField::new("phone", "Phone number")));
///
/// let mut form = RecordForm::new(Arc::new(schema));
/// form.set_field("firstName", "Ada")?;
/// form.set_field("phone", "123")?;
///
/// assert!(!form.validate_all());
/// assert_eq!(
/// 	form.field_status("phone").map(|s| s.message.as_str()),
/// 	Some("Please enter a valid phone number (10-11 digits)")
/// );
///
/// form.reset();
/// assert_eq!(form.value("firstName"), Some(""));
/// # Ok::<(), rolodex_forms::FormError>(())
/// ```
#[derive(Debug)]
pub struct RecordForm {
	schema: Arc<RecordSchema>,
	draft: Draft,
	validation: ValidationState,
}

impl RecordForm {
	/// Creates a pristine form: every field empty, every status clean.
	pub fn new(schema: Arc<RecordSchema>) -> Self {
		let draft = schema.empty_draft();
		let validation = schema.clean_state();
		Self {
			schema,
			draft,
			validation,
		}
	}

	/// Creates a form prefilled from existing values.
	///
	/// Only keys the schema declares are copied; everything else in
	/// `values` is ignored. Statuses start clean even for prefilled
	/// values, so no errors show before the user touches anything.
	pub fn prefilled(schema: Arc<RecordSchema>, values: &Draft) -> Self {
		let mut form = Self::new(schema);
		for (name, value) in values {
			if form.schema.has_field(name) {
				form.draft.insert(name.clone(), value.clone());
			}
		}
		form
	}

	/// Returns the schema this form edits against.
	pub fn schema(&self) -> &RecordSchema {
		&self.schema
	}

	/// Writes one field value and re-validates that field.
	///
	/// Returns [`FormError::UnknownField`] when the schema has no such
	/// field; the draft is left untouched in that case.
	pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> FormResult<()> {
		if !self.schema.has_field(name) {
			return Err(FormError::UnknownField(name.to_string()));
		}
		let value = value.into();
		let status = self.schema.validate_field(name, &value);
		self.draft.insert(name.to_string(), value);
		self.validation.insert(name.to_string(), status);
		Ok(())
	}

	/// Returns the current value of a field.
	pub fn value(&self, name: &str) -> Option<&str> {
		self.draft.get(name).map(String::as_str)
	}

	/// Returns the current draft.
	pub fn draft(&self) -> &Draft {
		&self.draft
	}

	/// Returns the current validation state.
	pub fn validation_state(&self) -> &ValidationState {
		&self.validation
	}

	/// Returns the current status of a field.
	pub fn field_status(&self, name: &str) -> Option<&FieldStatus> {
		self.validation.get(name)
	}

	/// Returns `true` when any field currently shows an error.
	pub fn has_errors(&self) -> bool {
		self.validation.values().any(|status| status.is_error)
	}

	/// Re-validates every field against the current draft.
	///
	/// The whole validation state is replaced in one step, so stale
	/// statuses from earlier edits cannot survive. Returns `true` when
	/// the draft is clean.
	pub fn validate_all(&mut self) -> bool {
		self.validation = self.schema.validate_draft(&self.draft);
		!self.has_errors()
	}

	/// Clears the draft and validation state back to pristine.
	pub fn reset(&mut self) {
		self.draft = self.schema.empty_draft();
		self.validation = self.schema.clean_state();
	}
}
