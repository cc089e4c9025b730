//! Account sign-up form.

use std::sync::Arc;

use crate::error::SchemaError;
use crate::form::{Form, FormConfig};
use crate::schema::Schema;
use crate::sink::StorageSink;
use crate::storage::{SnapshotStore, StorageBackend};

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Schema for the account sign-up form.
pub fn signup_schema() -> Result<Schema, SchemaError> {
    Schema::builder()
        .field("name")
        .label("Name")
        .required("Name is required")
        .min_length(2, "Name must be at least 2 characters")
        .field("email")
        .label("Email")
        .placeholder("example@example.com")
        .required("Email is required")
        .email("Invalid email")
        .field("password")
        .label("Password")
        .required("Password is required")
        .min_length(
            MIN_PASSWORD_LENGTH,
            format!("Password must be at least {} characters", MIN_PASSWORD_LENGTH),
        )
        .field("confirmPassword")
        .label("Confirm Password")
        .required("Please confirm your password")
        .equals_field("password", "Passwords must match")
        .build()
}

/// Mount the sign-up form, persisting to `backend` under the configured key.
pub fn mount_signup(
    backend: Arc<dyn StorageBackend>,
    config: FormConfig,
) -> Result<Form<StorageSink>, SchemaError> {
    let store = SnapshotStore::from_shared(backend, config.storage_key.clone());
    Ok(Form::mount(signup_schema()?, StorageSink::new(store), config))
}
