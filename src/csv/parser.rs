//! Roster Text Import
//!
//! Parses comma-delimited rows into records, isolating failures per row.

use super::{ImportReport, RowError, SkippedRow};
use crate::record::Record;
use crate::validation::validate;

/// Parse delimited text into surviving records plus skip reports.
///
/// Lines are processed independently: a structural failure (wrong column
/// count, non-integer age) or a validation failure skips that line only and
/// its reason lands in the report. Survivors keep their input order and raw
/// field values; normalization is a separate, explicit step for the caller.
/// A trailing newline does not produce a spurious row.
pub fn parse_csv(input: &str) -> ImportReport {
    let mut report = ImportReport::default();

    for line in input.lines() {
        match parse_row(line) {
            Ok(record) => report.records.push(record),
            Err(reason) => report.skipped.push(SkippedRow {
                line: line.to_string(),
                reason,
            }),
        }
    }

    report
}

/// Parse and validate one `name,age,email` row.
fn parse_row(line: &str) -> Result<Record, RowError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 3 {
        return Err(RowError::WrongColumnCount);
    }

    // No whitespace tolerance in the age field; " 30" is not an integer.
    let age = fields[1]
        .parse::<i32>()
        .map_err(|_| RowError::AgeNotInteger {
            field: fields[1].to_string(),
        })?;

    let record = Record::new(fields[0], age, fields[2]);
    validate(&record)?;
    Ok(record)
}
