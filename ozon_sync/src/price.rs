//! Distributor price string normalization

/// Convert a distributor price such as `"5'990.00 руб."` into the digit-only
/// form Ozon expects (`"5990"`).
///
/// Everything from the first `.` onwards is dropped, then every non-digit is
/// stripped from what remains. A price written with dots as thousands
/// separators (`"1.234.567 руб."`) therefore keeps only the leading group
/// (`"1"`); the distributor file uses apostrophes for grouping, so this is
/// left as is. Returns an empty string when no digits are present.
///
/// Only text is accepted. Numeric price cells are rejected earlier, see
/// [`DistributorRecord::price_text`](crate::distributor::DistributorRecord::price_text).
pub fn normalize_price(price: &str) -> String {
    let whole = price.split('.').next().unwrap_or_default();
    whole.chars().filter(char::is_ascii_digit).collect()
}
