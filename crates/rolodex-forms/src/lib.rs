//! Form handling for rolodex record editors.
//!
//! This crate covers the synchronous half of record editing: field
//! descriptors, validators, schemas, and the [`RecordForm`] draft
//! controller. Everything here is pure state. Submission, server
//! calls, and list bookkeeping live in `rolodex-admin`.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use rolodex_forms::{EmailField, PhoneField, RecordForm, RecordSchema, TextField};
//!
//! let mut schema = RecordSchema::new();
//! schema.add_field(Box::new(TextField::new("firstName", "First name")));
//! schema.add_field(Box::new(EmailField::new("email", "Email")));
//! schema.add_field(Box::new(PhoneField::new("phone", "Phone number")));
//!
//! let mut form = RecordForm::new(Arc::new(schema));
//! form.set_field("email", "ada@example")?;
//! assert_eq!(
//! 	form.field_status("email").map(|s| s.message.as_str()),
//! 	Some("Please enter a valid email address")
//! );
//! # Ok::<(), rolodex_forms::FormError>(())
//! ```

pub mod field;
pub mod fields;
pub mod form;
pub mod schema;
pub mod validators;

pub use field::{Field, FieldError, FieldResult, FieldStatus};
pub use fields::{EmailField, PasswordField, PhoneField, TextField};
pub use form::{FormError, FormResult, RecordForm};
pub use schema::{Draft, RecordSchema, ValidationState};
pub use validators::{EmailValidator, MinLengthValidator, PhoneValidator};
