//! Transformation module.
//!
//! - Coerce: per-field conversions with defaults
//! - Normalizer: raw rows to listings
//! - Pipeline: read, normalize, render, write

pub mod coerce;
pub mod normalizer;
pub mod pipeline;

pub use coerce::{split_images, to_bool, to_number};
pub use normalizer::{normalize, normalize_row};
pub use pipeline::*;
