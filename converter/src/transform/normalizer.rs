//! Row to [`Listing`] mapping.

use tracing::trace;

use super::coerce::{split_images, to_bool, to_number};
use crate::models::{Listing, RawRow};

/// Normalize every row, keeping input order.
///
/// Never fails: each row maps to exactly one listing.
pub fn normalize(rows: &[RawRow]) -> Vec<Listing> {
    rows.iter()
        .enumerate()
        .map(|(idx, row)| {
            let listing = normalize_row(row);
            trace_dropped_numbers(idx, row, &listing);
            listing
        })
        .collect()
}

/// Build one listing from one row. Only this row is consulted.
pub fn normalize_row(row: &RawRow) -> Listing {
    Listing {
        id: row.text("id"),
        title: row.text("title"),
        slug: row.text("slug"),
        address: row.text("address"),
        city: row.text("city"),
        neighborhood: row.text("neighborhood"),
        price: to_number(row.get("price")),
        price_currency: row.text("price_currency"),
        beds: to_number(row.get("beds")),
        baths: to_number(row.get("baths")),
        furnished: row.text("furnished"),
        area_sqm: to_number(row.get("area_sqm")),
        kind: row.text("type"),
        availability: row.text("availability"),
        featured: to_bool(row.get("featured")),
        description: row.text("description"),
        images: split_images(row.get("images")),
        contact_phone: row.text("contact_phone"),
        listing_url: row.text("listing_url"),
        lat: to_number(row.get("lat")),
        lng: to_number(row.get("lng")),
    }
}

fn trace_dropped_numbers(idx: usize, row: &RawRow, listing: &Listing) {
    let numbers = [
        ("price", listing.price),
        ("beds", listing.beds),
        ("baths", listing.baths),
        ("area_sqm", listing.area_sqm),
        ("lat", listing.lat),
        ("lng", listing.lng),
    ];
    for (field, value) in numbers {
        if value.is_some() {
            continue;
        }
        if let Some(raw) = row.get(field).filter(|raw| !raw.trim().is_empty()) {
            trace!(row = idx, field, raw, "unparseable number, using null");
        }
    }
}
