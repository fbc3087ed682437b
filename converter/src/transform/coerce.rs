//! Field coercions.
//!
//! Every function here is total: a value that cannot be converted falls
//! back to the field's default instead of failing.

/// Lower-cased, trimmed spellings that read as `true`.
pub const TRUE_VALUES: [&str; 4] = ["true", "1", "yes", "y"];

/// Separator between image URLs in the `images` column.
pub const IMAGE_SEPARATOR: char = ';';

/// Interpret a cell as a flag.
///
/// Only the spellings in [`TRUE_VALUES`] (any case, surrounding
/// whitespace ignored) give `true`. "false", "no" and unrecognized text
/// all give `false` and cannot be told apart afterwards.
pub fn to_bool(value: Option<&str>) -> bool {
    value
        .map(|v| v.trim().to_lowercase())
        .is_some_and(|v| TRUE_VALUES.contains(&v.as_str()))
}

/// Interpret a cell as a number.
///
/// Thousands separators (`,`) are dropped before parsing. Missing, blank
/// or unparseable cells give `None`, as do values JSON cannot carry
/// (`inf`, `NaN`).
pub fn to_number(value: Option<&str>) -> Option<f64> {
    let raw = value?;
    if raw.is_empty() {
        return None;
    }
    parse_or_none(&raw.replace(',', ""))
}

fn parse_or_none(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Split a `;` separated image list, trimming entries and dropping
/// empty ones. Order and duplicates are kept.
pub fn split_images(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or_default()
        .split(IMAGE_SEPARATOR)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
