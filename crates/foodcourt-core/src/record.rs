//! # Record Codec
//!
//! Line-oriented text records used by every data file.
//!
//! ## Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  One field per line, no headers, no escaping, no version marker.       │
//! │                                                                         │
//! │  stall_2.txt                                                            │
//! │  ───────────                                                            │
//! │  Dosa Corner        ← stall name                                        │
//! │  2                  ← stall number                                      │
//! │  1                  ← order count                                       │
//! │  7                  ← order id                                          │
//! │  1760600000         ← placed at (unix seconds)                          │
//! │  Asha               ← customer name                                     │
//! │  9876543210         ← customer phone                                    │
//! │  1                  ← line count                                        │
//! │  DOSA               ← item tag                                          │
//! │  Masala             ← item fields...                                    │
//! │  70.00              ← item price (terminates the item record)           │
//! │  2                  ← quantity                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Because fields are lines, a value containing a line break would shift every
//! following field. Names and phones are validated before they get here.

use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Record Trait
// =============================================================================

/// A value with a line-oriented text form.
pub trait Record: Sized {
    /// Appends this value's fields to the writer.
    fn write_record(&self, out: &mut RecordWriter);

    /// Reads one value, consuming exactly the fields `write_record` produced.
    fn read_record(reader: &mut RecordReader<'_>) -> CoreResult<Self>;
}

/// Encodes a record to a string.
pub fn encode<R: Record>(value: &R) -> String {
    let mut out = RecordWriter::new();
    value.write_record(&mut out);
    out.finish()
}

/// Decodes a single record from a string.
///
/// Trailing content after the record is ignored.
pub fn decode<R: Record>(text: &str) -> CoreResult<R> {
    let mut reader = RecordReader::new(text);
    R::read_record(&mut reader)
}

// =============================================================================
// Writer
// =============================================================================

/// Accumulates fields, one per line.
#[derive(Debug, Default)]
pub struct RecordWriter {
    buf: String,
}

impl RecordWriter {
    pub fn new() -> Self {
        RecordWriter { buf: String::new() }
    }

    /// Writes one text field.
    pub fn field(&mut self, value: impl std::fmt::Display) -> &mut Self {
        use std::fmt::Write;
        // Writing into a String cannot fail.
        let _ = writeln!(self.buf, "{}", value);
        self
    }

    /// Writes a money field in the data-file amount form.
    pub fn amount(&mut self, value: Money) -> &mut Self {
        self.field(value.to_amount_string())
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

// =============================================================================
// Reader
// =============================================================================

/// Pulls fields one line at a time and tracks the position for error messages.
#[derive(Debug)]
pub struct RecordReader<'a> {
    lines: std::str::Lines<'a>,
    position: usize,
}

impl<'a> RecordReader<'a> {
    pub fn new(text: &'a str) -> Self {
        RecordReader {
            lines: text.lines(),
            position: 0,
        }
    }

    /// Number of fields consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Reads the next raw field (a trailing `\r` is dropped).
    pub fn next_field(&mut self) -> CoreResult<&'a str> {
        match self.lines.next() {
            Some(line) => {
                self.position += 1;
                Ok(line.strip_suffix('\r').unwrap_or(line))
            }
            None => Err(CoreError::MalformedRecord {
                field_index: self.position,
                reason: "unexpected end of record".to_string(),
            }),
        }
    }

    /// Reads the next field and parses it.
    pub fn next_parsed<T: FromStr>(&mut self, what: &str) -> CoreResult<T> {
        let index = self.position;
        let raw = self.next_field()?;
        raw.trim().parse().map_err(|_| CoreError::MalformedRecord {
            field_index: index,
            reason: format!("expected {}, found '{}'", what, raw),
        })
    }

    /// Reads the next field as a money amount.
    pub fn next_amount(&mut self, what: &str) -> CoreResult<Money> {
        let index = self.position;
        let raw = self.next_field()?;
        Money::parse_amount(raw).ok_or_else(|| CoreError::MalformedRecord {
            field_index: index,
            reason: format!("expected {} amount, found '{}'", what, raw),
        })
    }

    /// Skips the rest of an item record of unknown shape.
    ///
    /// Item records end with their price and are followed by the line's
    /// quantity, so the record ends at the first amount field whose next field
    /// is an integer. An amount-like field followed by text (`COMBO`, `2`,
    /// `Thali`, ...) is part of the record. The quantity is left unread.
    /// Returns the number of fields skipped.
    pub fn skip_item_fields(&mut self) -> CoreResult<usize> {
        let mut skipped = 0;
        loop {
            let raw = self.next_field()?;
            skipped += 1;
            let quantity_follows = self
                .peek_field()
                .is_some_and(|next| next.trim().parse::<i64>().is_ok());
            if quantity_follows && Money::parse_amount(raw).is_some() {
                return Ok(skipped);
            }
        }
    }

    fn peek_field(&self) -> Option<&'a str> {
        self.lines.clone().next()
    }

    /// True when only blank lines remain.
    pub fn is_exhausted(&self) -> bool {
        self.lines.clone().all(|line| line.trim().is_empty())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_one_field_per_line() {
        let mut out = RecordWriter::new();
        out.field("Pizza Palace").field(1).amount(Money::from_rupees(500));
        assert_eq!(out.finish(), "Pizza Palace\n1\n500.00\n");
    }

    #[test]
    fn test_reader_handles_crlf() {
        let mut reader = RecordReader::new("Chai Point\r\n4\r\n");
        assert_eq!(reader.next_field().unwrap(), "Chai Point");
        assert_eq!(reader.next_parsed::<u8>("stall number").unwrap(), 4);
        assert!(reader.is_exhausted());
    }

    #[test]
    fn test_reader_reports_position() {
        let mut reader = RecordReader::new("1\nseven\n");
        reader.next_parsed::<u64>("id").unwrap();
        let err = reader.next_parsed::<u64>("count").unwrap_err();
        match err {
            CoreError::MalformedRecord { field_index, reason } => {
                assert_eq!(field_index, 1);
                assert!(reason.contains("seven"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_reader_end_of_input() {
        let mut reader = RecordReader::new("only\n");
        reader.next_field().unwrap();
        assert!(matches!(
            reader.next_field(),
            Err(CoreError::MalformedRecord { field_index: 1, .. })
        ));
    }

    #[test]
    fn test_skip_item_fields() {
        let mut reader = RecordReader::new("Mango\nLarge\n120.00\n3\n");
        assert_eq!(reader.skip_item_fields().unwrap(), 3);
        assert_eq!(reader.next_parsed::<i64>("quantity").unwrap(), 3);
    }

    #[test]
    fn test_skip_item_fields_passes_numeric_labels() {
        let mut reader = RecordReader::new("2\nThali\n150.00\n1\nDOSA\nMasala\n70.00\n1\n");
        assert_eq!(reader.skip_item_fields().unwrap(), 3);
        assert_eq!(reader.next_parsed::<i64>("quantity").unwrap(), 1);
        assert_eq!(reader.next_field().unwrap(), "DOSA");
    }

    #[test]
    fn test_skip_item_fields_needs_a_quantity() {
        let mut reader = RecordReader::new("Thali\n150.00\n");
        assert!(matches!(
            reader.skip_item_fields(),
            Err(CoreError::MalformedRecord { field_index: 2, .. })
        ));
    }
}
