//! Record schemas: ordered collections of field descriptors.

use std::collections::HashMap;

use crate::field::{Field, FieldStatus};

/// A draft under edit, keyed by field name. Values are the raw strings
/// the user typed.
pub type Draft = HashMap<String, String>;

/// Per-field validation outcomes, keyed by field name.
pub type ValidationState = HashMap<String, FieldStatus>;

/// An ordered set of field descriptors describing one kind of record.
///
/// The schema owns no values. It produces empty drafts and clean
/// validation states shaped to its fields, and judges values handed to
/// it. Field order is preserved for rendering.
///
/// # Examples
///
/// ```
/// use rolodex_forms::{PhoneField, RecordSchema, TextField};
///
/// let mut schema = RecordSchema::new();
/// schema.add_field(Box::new(TextField::new("firstName", "First name")));
/// schema.add_field(Box::new(PhoneField::new("phone", "Phone number")));
///
/// let draft = schema.empty_draft();
/// assert_eq!(draft.len(), 2);
/// assert_eq!(draft["phone"], "");
///
/// let status = schema.validate_field("phone", "123");
/// assert!(status.is_error);
/// ```
#[derive(Default)]
pub struct RecordSchema {
	fields: Vec<Box<dyn Field>>,
}

impl RecordSchema {
	/// Creates an empty schema.
	pub fn new() -> Self {
		Self { fields: Vec::new() }
	}

	/// Appends a field descriptor.
	pub fn add_field(&mut self, field: Box<dyn Field>) {
		self.fields.push(field);
	}

	/// Returns the fields in declaration order.
	pub fn fields(&self) -> &[Box<dyn Field>] {
		&self.fields
	}

	/// Looks up a field descriptor by name.
	pub fn field(&self, name: &str) -> Option<&dyn Field> {
		self.fields
			.iter()
			.find(|field| field.name() == name)
			.map(|field| field.as_ref())
	}

	/// Returns `true` when a descriptor with `name` exists.
	pub fn has_field(&self, name: &str) -> bool {
		self.field(name).is_some()
	}

	/// Builds a draft with every field present and set to `""`.
	pub fn empty_draft(&self) -> Draft {
		self.fields
			.iter()
			.map(|field| (field.name().to_string(), String::new()))
			.collect()
	}

	/// Builds a validation state with every field present and clean.
	pub fn clean_state(&self) -> ValidationState {
		self.fields
			.iter()
			.map(|field| (field.name().to_string(), FieldStatus::valid()))
			.collect()
	}

	/// Validates one value against the named field.
	///
	/// Names without a descriptor validate clean, so callers never have
	/// to special-case extra draft keys.
	pub fn validate_field(&self, name: &str, value: &str) -> FieldStatus {
		match self.field(name) {
			Some(field) => field.validate(value),
			None => FieldStatus::valid(),
		}
	}

	/// Validates a whole draft, producing one status per field.
	///
	/// Fields missing from the draft are judged as empty.
	pub fn validate_draft(&self, draft: &Draft) -> ValidationState {
		self.fields
			.iter()
			.map(|field| {
				let value = draft.get(field.name()).map(String::as_str).unwrap_or("");
				(field.name().to_string(), field.validate(value))
			})
			.collect()
	}
}

impl std::fmt::Debug for RecordSchema {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RecordSchema")
			.field(
				"fields",
				&self.fields.iter().map(|field| field.name()).collect::<Vec<_>>(),
			)
			.finish()
	}
}
