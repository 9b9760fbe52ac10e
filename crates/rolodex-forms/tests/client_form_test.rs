//! End-to-end walk of a client form through the public API.

use std::sync::Arc;

use rolodex_forms::{EmailField, PhoneField, RecordForm, RecordSchema, TextField};

fn client_schema() -> Arc<RecordSchema> {
	let mut schema = RecordSchema::new();
	schema.add_field(Box::new(TextField::new("firstName", "First name")));
	schema.add_field(Box::new(TextField::new("lastName", "Last name")));
	schema.add_field(Box::new(TextField::new("username", "Username")));
	schema.add_field(Box::new(EmailField::new("email", "Email")));
	schema.add_field(Box::new(PhoneField::new("phone", "Phone number")));
	Arc::new(schema)
}

#[test]
fn test_typing_mistakes_surface_and_clear_per_keystroke() {
	// Arrange
	let mut form = RecordForm::new(client_schema());

	// Act: a partial phone number while typing
	form.set_field("phone", "0901234").unwrap();

	// Assert
	assert_eq!(
		form.field_status("phone").unwrap().message,
		"Please enter a valid phone number (10-11 digits)"
	);

	// Act: the rest of the digits arrive
	form.set_field("phone", "09012345678").unwrap();

	// Assert
	assert!(form.field_status("phone").unwrap().is_valid());
}

#[test]
fn test_submit_validation_blocks_until_draft_is_complete() {
	// Arrange
	let mut form = RecordForm::new(client_schema());
	form.set_field("firstName", "Ada").unwrap();
	form.set_field("username", "ada").unwrap();

	// Act
	let clean = form.validate_all();

	// Assert: untouched required fields are flagged too
	assert!(!clean);
	assert_eq!(form.field_status("lastName").unwrap().message, "Last name is required");
	assert_eq!(form.field_status("phone").unwrap().message, "Phone number is required");

	// Act: fill in the rest and re-validate
	form.set_field("lastName", "Lovelace").unwrap();
	form.set_field("phone", "0312345678").unwrap();

	// Assert: email stays optional
	assert!(form.validate_all());
}

#[test]
fn test_validate_all_replaces_stale_statuses() {
	// Arrange
	let mut form = RecordForm::new(client_schema());
	form.set_field("email", "broken@").unwrap();
	assert!(form.field_status("email").unwrap().is_error);

	// Act: the draft is corrected behind the scenes, then re-judged
	form.set_field("email", "fixed@example.com").unwrap();
	form.validate_all();

	// Assert
	assert!(form.field_status("email").unwrap().is_valid());
}

#[test]
fn test_reset_after_submit_leaves_no_trace() {
	// Arrange
	let mut form = RecordForm::new(client_schema());
	form.set_field("firstName", "Ada").unwrap();
	form.set_field("lastName", "Lovelace").unwrap();
	form.set_field("username", "ada").unwrap();
	form.set_field("phone", "0312345678").unwrap();
	assert!(form.validate_all());

	// Act
	form.reset();

	// Assert
	assert!(form.draft().values().all(String::is_empty));
	assert!(form.validation_state().values().all(|s| s.is_valid()));
}
