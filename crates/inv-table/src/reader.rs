//! CSV parsing into a [`Frame`].

use csv::ReaderBuilder;
use inv_core::{Error, Result};

use crate::frame::Frame;

/// Parse raw bytes as delimited tabular data.
///
/// The first record is the header row. Invalid UTF-8, ragged records and a
/// missing or empty header row all surface as parse failures; nothing about
/// the inventory schema is checked here (required columns are validated by
/// the operation that needs them).
pub fn parse_csv(bytes: &[u8]) -> Result<Frame> {
    let mut rdr = ReaderBuilder::new().from_reader(bytes);

    let headers = rdr
        .headers()
        .map_err(|e| Error::Parse(format!("invalid header row: {e}")))?
        .clone();
    let columns: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    if columns.is_empty() || columns.iter().all(|c| c.trim().is_empty()) {
        return Err(Error::Parse("empty table: no header row".to_string()));
    }

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(|e| Error::Parse(format!("invalid record: {e}")))?;
        rows.push(record.iter().map(|c| c.to_string()).collect());
    }

    Frame::new(columns, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_rows() {
        let csv = b"Location,Item,Count\nA,Widget,10\nB,Bolt,5\n";
        let frame = parse_csv(csv).unwrap();
        assert_eq!(frame.columns(), ["Location", "Item", "Count"]);
        assert_eq!(frame.n_rows(), 2);
        assert_eq!(frame.rows()[1], vec!["B", "Bolt", "5"]);
    }

    #[test]
    fn binary_garbage_is_a_parse_error() {
        let bytes = [0xff, 0xfe, 0x00, 0x9c, 0xff, 0x10, 0x82];
        let err = parse_csv(&bytes).unwrap_err();
        assert!(matches!(err, Error::Parse(_)), "got: {err}");
    }

    #[test]
    fn ragged_record_is_a_parse_error() {
        let csv = b"Location,Item,Count\nA,Widget,10\nB,Bolt\n";
        let err = parse_csv(csv).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn empty_input_is_a_parse_error() {
        let err = parse_csv(b"").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn header_only_table_is_valid_and_empty() {
        let frame = parse_csv(b"Location,Item,Count\n").unwrap();
        assert_eq!(frame.n_rows(), 0);
        assert_eq!(frame.n_cols(), 3);
    }
}
