use regex::Regex;
use std::sync::LazyLock;

// ASCII digits only; no calendar validation.
static USAGE_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}/[0-9]{2}/[0-9]{2}$").expect("usage date pattern is valid"));

/// True when `s` is exactly `YYYY/MM/DD`.
pub fn is_usage_date(s: &str) -> bool {
    USAGE_DATE_RE.is_match(s)
}
