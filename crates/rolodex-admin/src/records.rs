//! Record values and the record kinds the panel manages.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use rolodex_forms::{Draft, EmailField, PasswordField, PhoneField, RecordSchema, TextField};

/// A record as returned by the record service: a flat map of field
/// values plus an `"id"` assigned by the service.
pub type Record = HashMap<String, Value>;

/// Extracts the service-assigned id of a record, if present.
pub fn record_id(record: &Record) -> Option<&str> {
	record.get("id").and_then(Value::as_str)
}

/// Converts a record into draft values for prefilling an edit form.
///
/// Strings are taken verbatim and numbers are rendered to strings,
/// matching inputs that post digits as text. Nested or null values
/// have no input to land in and are dropped.
pub fn record_values(record: &Record) -> Draft {
	record
		.iter()
		.filter_map(|(name, value)| match value {
			Value::String(s) => Some((name.clone(), s.clone())),
			Value::Number(n) => Some((name.clone(), n.to_string())),
			_ => None,
		})
		.collect()
}

/// The kinds of records the admin panel edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
	Client,
	Employee,
}

impl RecordKind {
	/// Lowercase singular name, used in keys and mid-sentence text.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Client => "client",
			Self::Employee => "employee",
		}
	}

	/// Capitalized singular name, used at the start of notices.
	pub fn label(&self) -> &'static str {
		match self {
			Self::Client => "Client",
			Self::Employee => "Employee",
		}
	}

	/// Lowercase plural name, used in fetch notices.
	pub fn plural(&self) -> &'static str {
		match self {
			Self::Client => "clients",
			Self::Employee => "employees",
		}
	}

	/// Builds the field schema for this kind, in display order.
	///
	/// Employees carry every client field plus a password.
	pub fn schema(&self) -> RecordSchema {
		let mut schema = RecordSchema::new();
		schema.add_field(Box::new(TextField::new("firstName", "First name")));
		schema.add_field(Box::new(TextField::new("lastName", "Last name")));
		schema.add_field(Box::new(TextField::new("username", "Username")));
		schema.add_field(Box::new(EmailField::new("email", "Email")));
		if matches!(self, Self::Employee) {
			schema.add_field(Box::new(PasswordField::new("password", "Password")));
		}
		schema.add_field(Box::new(PhoneField::new("phone", "Phone number")));
		schema
	}
}

impl fmt::Display for RecordKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
