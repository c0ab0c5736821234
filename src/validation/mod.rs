//! Record Validation
//!
//! Domain rules for roster records, checked in a fixed order so the reported
//! reason is deterministic.

use crate::record::Record;
use thiserror::Error;

/// Upper bound for a plausible age
pub const MAX_AGE: i32 = 120;

/// Domain-rule violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is empty")]
    EmptyName,

    #[error("Invalid age: {0}")]
    InvalidAge(i32),

    #[error("Invalid email: {0}")]
    InvalidEmail(String),
}

/// Validate a record against the domain rules.
///
/// Rules run in order (name, age, email) and the first failure wins. The
/// email rule is deliberately permissive: it only requires a `@` somewhere in
/// the value.
pub fn validate(record: &Record) -> Result<(), ValidationError> {
    if record.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if record.age < 0 || record.age > MAX_AGE {
        return Err(ValidationError::InvalidAge(record.age));
    }

    if !record.email.contains('@') {
        return Err(ValidationError::InvalidEmail(record.email.clone()));
    }

    Ok(())
}
