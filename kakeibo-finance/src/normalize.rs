use kakeibo_core::Row;

/// Strip byte-order marks and surrounding whitespace from a header name.
pub fn normalize_key(key: &str) -> String {
    key.replace('\u{FEFF}', "").trim().to_string()
}

/// Copy of `row` with every key normalized. Values are untouched.
pub fn normalize_row(row: &Row) -> Row {
    Row::from_pairs(row.iter().map(|(k, v)| (normalize_key(k), v)))
}
