//! Domain models for property listings.
//!
//! - [`RawRow`] - one CSV data line keyed by header name
//! - [`Listing`] - the normalized, fixed-shape output record

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// Field List
// =============================================================================

/// Every key of a serialized [`Listing`], in output order.
pub const FIELD_NAMES: [&str; 21] = [
    "id",
    "title",
    "slug",
    "address",
    "city",
    "neighborhood",
    "price",
    "price_currency",
    "beds",
    "baths",
    "furnished",
    "area_sqm",
    "type",
    "availability",
    "featured",
    "description",
    "images",
    "contact_phone",
    "listing_url",
    "lat",
    "lng",
];

// =============================================================================
// Raw Row
// =============================================================================

/// A CSV data line as a header-to-cell mapping.
///
/// Cells the line did not provide are absent keys; an empty cell is a
/// present key with an empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow(BTreeMap<String, String>);

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw cell value, `None` when the column is absent.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Cell value with absent columns read as the empty string.
    pub fn text(&self, field: &str) -> String {
        self.get(field).unwrap_or_default().to_string()
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<BTreeMap<String, String>> for RawRow {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

// =============================================================================
// Listing
// =============================================================================

/// A normalized property listing.
///
/// Text fields default to `""`, numeric fields to `None` (serialized as
/// `null`), `featured` to `false` and `images` to an empty list. Field
/// order here is the key order of the emitted JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub address: String,
    pub city: String,
    pub neighborhood: String,
    pub price: Option<f64>,
    pub price_currency: String,
    pub beds: Option<f64>,
    pub baths: Option<f64>,
    /// Free text such as "Furnished" or "Semi-furnished", not a flag.
    pub furnished: String,
    pub area_sqm: Option<f64>,
    #[serde(rename = "type")]
    pub kind: String,
    pub availability: String,
    pub featured: bool,
    pub description: String,
    pub images: Vec<String>,
    pub contact_phone: String,
    pub listing_url: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}
