//! Amount cleaning for statement cells such as `"1,500"`.

/// Strip thousands separators and read the leading integer.
///
/// Leading whitespace and a single sign are accepted, parsing stops at the
/// first non-digit, and a cell with no leading digits is `0`. Values beyond
/// `i64` saturate.
pub fn clean_amount(raw: &str) -> i64 {
    let cleaned = raw.replace(',', "");
    let s = cleaned.trim_start();

    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }

    if negative { -value } else { value }
}
