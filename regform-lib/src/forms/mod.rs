//! Prebuilt registration forms.
//!
//! Two variants share the same machinery: the student registration form
//! logs its submissions, the account sign-up form persists them under a
//! fixed key and restores them on mount.

mod signup;
mod student;

pub use signup::{mount_signup, signup_schema};
pub use student::{mount_student, student_schema};

use std::fmt;
use std::str::FromStr;

use crate::error::SchemaError;
use crate::schema::Schema;

/// The prebuilt forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    /// Student registration, submitted to the log.
    Student,
    /// Account sign-up, submitted to key-value storage.
    Signup,
}

impl FormKind {
    /// All prebuilt forms.
    pub const ALL: [FormKind; 2] = [FormKind::Student, FormKind::Signup];

    /// Identifier used on the command line and as a storage key prefix.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Signup => "signup",
        }
    }

    /// Display title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Student => "Registration Form",
            Self::Signup => "Create Account",
        }
    }

    /// Build this form's schema.
    pub fn schema(&self) -> Result<Schema, SchemaError> {
        match self {
            Self::Student => student_schema(),
            Self::Signup => signup_schema(),
        }
    }

    /// Whether submissions are persisted rather than logged.
    pub fn persists(&self) -> bool {
        matches!(self, Self::Signup)
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for FormKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown form '{}', expected one of: student, signup", s))
    }
}
