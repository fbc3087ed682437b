//! CSV reader producing [`RawRow`]s.
//!
//! Input is UTF-8, comma-delimited, with a header line. No listing
//! specific logic here; coercion happens in [`crate::transform`].

use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::CsvResult;
use crate::models::RawRow;

const BOM: char = '\u{feff}';

/// Rows plus the header line they were keyed by.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Data rows in file order.
    pub records: Vec<RawRow>,
    /// Column headers (BOM stripped, trimmed)
    pub headers: Vec<String>,
}

/// Parse CSV from any reader.
///
/// Blank lines are skipped. A line shorter than the header leaves its
/// trailing columns absent; cells past the last header are ignored.
pub fn parse_csv<R: Read>(reader: R) -> CsvResult<ParseResult> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(reader);

    let headers = clean_headers(reader.headers()?);

    let mut records = Vec::new();
    for record in reader.records() {
        records.push(to_row(&headers, &record?));
    }

    Ok(ParseResult { records, headers })
}

/// Parse CSV text.
///
/// # Example
/// ```
/// let result = proplist::parse_csv_str("id,title\n1,Flat A\n").unwrap();
///
/// assert_eq!(result.records.len(), 1);
/// assert_eq!(result.records[0].get("title"), Some("Flat A"));
/// ```
pub fn parse_csv_str(csv: &str) -> CsvResult<ParseResult> {
    parse_csv(csv.as_bytes())
}

/// Parse a CSV file. The handle is closed before this returns.
pub fn parse_csv_file<P: AsRef<Path>>(path: P) -> CsvResult<ParseResult> {
    let file = File::open(path.as_ref())?;
    parse_csv(file)
}

fn clean_headers(record: &StringRecord) -> Vec<String> {
    record
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let h = if i == 0 { h.trim_start_matches(BOM) } else { h };
            h.trim().to_string()
        })
        .collect()
}

fn to_row(headers: &[String], record: &StringRecord) -> RawRow {
    headers
        .iter()
        .zip(record.iter())
        .map(|(header, value)| (header.as_str(), value))
        .collect()
}
