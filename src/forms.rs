//! Form handling
//!
//! Field descriptors, validators, schemas, and the draft controller,
//! reachable through the `rolodex::forms` namespace.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use rolodex::forms::{RecordForm, RecordSchema, TextField};
//!
//! let mut schema = RecordSchema::new();
//! schema.add_field(Box::new(TextField::new("name", "Name")));
//!
//! let mut form = RecordForm::new(Arc::new(schema));
//! form.set_field("name", "").unwrap();
//! assert_eq!(form.field_status("name").unwrap().message, "Name is required");
//! ```

pub use rolodex_forms::*;
