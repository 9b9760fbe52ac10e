//! Built-in field types for record schemas.
//!
//! Each type implements [`Field`](crate::field::Field) with the empty-value
//! and format rules of one kind of input. Constructors take the draft key
//! and the label used in messages; builder methods adjust requiredness.

pub mod email_field;
pub mod password_field;
pub mod phone_field;
pub mod text_field;

pub use email_field::EmailField;
pub use password_field::PasswordField;
pub use phone_field::PhoneField;
pub use text_field::TextField;
