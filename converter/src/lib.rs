//! # Proplist - property listing CSV to JSON
//!
//! Proplist reads a CSV export of property listings and produces a JSON
//! array of fixed-shape records with typed fields.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│   Parser    │────▶│ Normalizer  │────▶│  JSON array │
//! │   (UTF-8)   │     │  (RawRow)   │     │  (Listing)  │     │  (indent 2) │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! let summary = proplist::convert_str("id,price\n1,\"1,000\"\n").unwrap();
//! assert_eq!(summary.listings[0].price, Some(1000.0));
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`models`] - Domain models (RawRow, Listing)
//! - [`parser`] - CSV reading
//! - [`transform`] - Coercions, row mapping, pipeline
//! - [`logging`] - `tracing` subscriber setup

// Core modules
pub mod error;
pub mod models;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Logging
pub mod logging;

pub use transform::pipeline;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ConvertError, CsvError, OutputError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{Listing, RawRow, FIELD_NAMES};

// =============================================================================
// Re-exports - CSV Parsing
// =============================================================================

pub use parser::{parse_csv, parse_csv_file, parse_csv_str, ParseResult};

// =============================================================================
// Re-exports - Normalization
// =============================================================================

pub use transform::coerce::{split_images, to_bool, to_number};
pub use transform::normalizer::{normalize, normalize_row};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use transform::pipeline::{
    convert_file, convert_str, render_json, run, ConvertOptions, ConvertSummary, CsvInfo,
};
