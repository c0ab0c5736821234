//! Roster Text Export

use crate::record::Record;

/// Render records as comma-delimited text, one `name,age,email` line per
/// record, newline after every line including the last.
///
/// Best-effort and lossy: embedded commas are not escaped, so the output is
/// not guaranteed to parse back. The binary form is the exact one.
pub fn render_csv(records: &[Record]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&record.to_string());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_is_newline_terminated() {
        let records = vec![
            Record::new("Alice", 30, "alice@mail.com"),
            Record::new("Charlie", 40, "charlie@mail.com"),
        ];

        assert_eq!(
            render_csv(&records),
            "Alice,30,alice@mail.com\nCharlie,40,charlie@mail.com\n"
        );
    }

    #[test]
    fn test_render_empty_sequence_is_empty() {
        assert_eq!(render_csv(&[]), "");
    }

    #[test]
    fn test_render_does_not_escape_commas() {
        let records = vec![Record::new("Doe, Jane", 33, "jane@mail.com")];
        assert_eq!(render_csv(&records), "Doe, Jane,33,jane@mail.com\n");
    }
}
