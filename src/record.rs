//! Roster Record Entity
//!
//! One parsed roster entry. Records are built raw from input fields and
//! mutated exactly once afterwards, by [`Record::normalize`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single roster entry: name, age, email.
///
/// Field values are raw until [`normalize`](Record::normalize) runs; the age
/// is signed so an out-of-range negative value reaches validation instead of
/// failing at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub age: i32,
    pub email: String,
}

impl Record {
    /// Create a record from raw field values
    pub fn new(name: &str, age: i32, email: &str) -> Self {
        Self {
            name: name.to_string(),
            age,
            email: email.to_string(),
        }
    }

    /// Normalize in place: trim the name, trim and lowercase the email.
    ///
    /// Idempotent; this is the only mutation a record sees after
    /// construction.
    pub fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
        self.email = self.email.trim().to_lowercase();
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.name, self.age, self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        let mut record = Record::new("  Alice  ", 30, " ALICE@MAIL.COM ");
        record.normalize();

        assert_eq!(record.name, "Alice");
        assert_eq!(record.email, "alice@mail.com");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let mut record = Record::new(" Bob ", 44, " Bob@Mail.Com ");
        record.normalize();
        let once = record.clone();
        record.normalize();

        assert_eq!(record, once);
    }

    #[test]
    fn test_display_renders_delimited_fields() {
        let record = Record::new("Alice", 30, "alice@mail.com");
        assert_eq!(record.to_string(), "Alice,30,alice@mail.com");
    }
}
