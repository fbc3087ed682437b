//! High-level API: CSV file in, JSON document out.
//!
//! # Example
//!
//! ```rust,no_run
//! use proplist::pipeline::{run, ConvertOptions};
//!
//! fn main() -> Result<(), proplist::ConvertError> {
//!     let options = ConvertOptions::new("properties.csv").with_output("properties.json");
//!     let summary = run(&options)?;
//!     println!("Converted {} listings", summary.listings.len());
//!     Ok(())
//! }
//! ```

use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::normalizer::normalize;
use crate::error::{ConvertResult, CsvResult, OutputError, OutputResult};
use crate::models::Listing;
use crate::parser::{parse_csv_file, parse_csv_str, ParseResult};

/// Options for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// CSV file to read
    pub input: PathBuf,

    /// Where to write the JSON document; stdout when `None`
    pub output: Option<PathBuf>,
}

impl ConvertOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }
}

/// Result of converting a CSV source.
#[derive(Debug, Clone, Serialize)]
pub struct ConvertSummary {
    /// One listing per data row, in file order
    pub listings: Vec<Listing>,

    /// CSV parsing metadata
    pub csv_info: CsvInfo,
}

/// CSV file information
#[derive(Debug, Clone, Serialize)]
pub struct CsvInfo {
    pub headers: Vec<String>,
    pub row_count: usize,
}

/// Convert a CSV file into listings.
pub fn convert_file<P: AsRef<Path>>(path: P) -> CsvResult<ConvertSummary> {
    let path = path.as_ref();
    info!(input = %path.display(), "reading CSV");
    let parsed = parse_csv_file(path)?;
    Ok(convert_parsed(parsed))
}

/// Convert CSV text into listings.
pub fn convert_str(csv: &str) -> CsvResult<ConvertSummary> {
    Ok(convert_parsed(parse_csv_str(csv)?))
}

fn convert_parsed(parsed: ParseResult) -> ConvertSummary {
    debug!(columns = %parsed.headers.join(", "), "CSV header");
    info!(rows = parsed.records.len(), "read rows");

    let listings = normalize(&parsed.records);
    info!(listings = listings.len(), "normalized listings");

    ConvertSummary {
        csv_info: CsvInfo {
            headers: parsed.headers,
            row_count: parsed.records.len(),
        },
        listings,
    }
}

/// Render listings as a JSON array indented by two spaces.
pub fn render_json(listings: &[Listing]) -> OutputResult<String> {
    Ok(serde_json::to_string_pretty(listings)?)
}

/// Write the document to `path`, replacing any existing file.
pub fn write_json_file(json: &str, path: &Path) -> OutputResult<()> {
    fs::write(path, json).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the document to `out` followed by a newline.
pub fn write_json<W: Write>(json: &str, mut out: W) -> OutputResult<()> {
    writeln!(out, "{}", json)
        .and_then(|()| out.flush())
        .map_err(|source| OutputError::Write {
            path: PathBuf::from("<stdout>"),
            source,
        })
}

/// Run a full conversion.
///
/// With an output path the document goes to that file and a `Wrote <path>`
/// line is printed; otherwise the document itself is printed to stdout.
pub fn run(options: &ConvertOptions) -> ConvertResult<ConvertSummary> {
    let summary = convert_file(&options.input)?;
    let json = render_json(&summary.listings)?;

    match &options.output {
        Some(path) => {
            write_json_file(&json, path)?;
            info!(output = %path.display(), "JSON written");
            println!("Wrote {}", path.display());
        }
        None => write_json(&json, std::io::stdout().lock())?,
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConvertError, CsvError};
    use crate::models::FIELD_NAMES;
    use serde_json::{json, Value};

    const SAMPLE: &str = "id,title,price,featured,images\n1,Flat A,\"1,000\",yes,a.jpg;b.jpg\n";

    #[test]
    fn test_end_to_end_sample() {
        let summary = convert_str(SAMPLE).unwrap();
        let json = render_json(&summary.listings).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(
            value,
            json!([{
                "id": "1",
                "title": "Flat A",
                "slug": "",
                "address": "",
                "city": "",
                "neighborhood": "",
                "price": 1000.0,
                "price_currency": "",
                "beds": null,
                "baths": null,
                "furnished": "",
                "area_sqm": null,
                "type": "",
                "availability": "",
                "featured": true,
                "description": "",
                "images": ["a.jpg", "b.jpg"],
                "contact_phone": "",
                "listing_url": "",
                "lat": null,
                "lng": null
            }])
        );
        assert_eq!(summary.csv_info.row_count, 1);
        assert_eq!(summary.csv_info.headers, vec!["id", "title", "price", "featured", "images"]);
    }

    #[test]
    fn test_every_object_has_exact_keys() {
        let csv = "id,beds\n1,2\n2,\n3\n";
        let summary = convert_str(csv).unwrap();
        let value: Value = serde_json::from_str(&render_json(&summary.listings).unwrap()).unwrap();
        let items = value.as_array().unwrap();

        assert_eq!(items.len(), 3);
        for item in items {
            let obj = item.as_object().unwrap();
            assert_eq!(obj.len(), FIELD_NAMES.len());
            assert!(FIELD_NAMES.iter().all(|k| obj.contains_key(*k)));
        }
        assert_eq!(items[0]["beds"], json!(2.0));
        assert_eq!(items[1]["beds"], Value::Null);
        assert_eq!(items[2]["beds"], Value::Null);
    }

    #[test]
    fn test_render_uses_two_space_indent() {
        let json = render_json(&[Listing::default()]).unwrap();

        assert!(json.starts_with("[\n  {\n    \"id\": \"\","));
        assert!(json.ends_with("\n  }\n]"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_write_json_appends_newline() {
        let mut buf = Vec::new();
        write_json("[]", &mut buf).unwrap();

        assert_eq!(buf, b"[]\n");
    }

    #[test]
    fn test_run_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("properties.csv");
        let output = dir.path().join("properties.json");
        fs::write(&input, SAMPLE).unwrap();
        fs::write(&output, "stale").unwrap();

        let summary = run(&ConvertOptions::new(&input).with_output(&output)).unwrap();

        assert_eq!(summary.listings.len(), 1);
        let written: Vec<Listing> =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written, summary.listings);
        assert_eq!(written[0].price, Some(1000.0));
    }

    #[test]
    fn test_run_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.json");
        let options = ConvertOptions::new(dir.path().join("missing.csv")).with_output(&output);

        let err = run(&options).unwrap_err();

        assert!(matches!(err, ConvertError::Csv(CsvError::Io(_))));
        assert!(!output.exists());
    }

    #[test]
    fn test_run_unwritable_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("properties.csv");
        fs::write(&input, SAMPLE).unwrap();
        let output = dir.path().join("no-such-dir").join("out.json");

        let err = run(&ConvertOptions::new(&input).with_output(&output)).unwrap_err();

        assert!(matches!(err, ConvertError::Output(OutputError::Write { .. })));
    }
}
