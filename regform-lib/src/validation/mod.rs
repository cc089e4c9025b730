//! Form validation.
//!
//! Validation is a pure function of a [`Schema`](crate::schema::Schema) and
//! a [`Snapshot`](crate::store::Snapshot). Each field reports at most one
//! error: the message of its first failing rule.
//!
//! # Example
//!
//! ```
//! use regform_lib::schema::Schema;
//! use regform_lib::store::Snapshot;
//! use regform_lib::validation::validate;
//!
//! let schema = Schema::builder()
//!     .field("name")
//!         .required("Name is required")
//!         .min_length(2, "Name must be at least 2 characters")
//!     .build()
//!     .unwrap();
//!
//! let errors = validate(&schema, &Snapshot::new().with("name", "A"));
//! assert_eq!(errors.get("name"), Some("Name must be at least 2 characters"));
//! ```

mod result;
mod validator;

pub use result::{ErrorMap, FieldError};
pub use validator::{validate, validate_field};
