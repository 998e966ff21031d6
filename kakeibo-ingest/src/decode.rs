//! Shift_JIS decoding (card statement exports are not UTF-8).

use encoding_rs::SHIFT_JIS;
use tracing::{debug, warn};

/// Decode raw statement bytes as Shift_JIS.
///
/// A UTF-8 or UTF-16 byte-order mark overrides the label. Malformed byte
/// sequences become U+FFFD.
pub fn decode_shift_jis(bytes: &[u8]) -> String {
    let (text, used, had_errors) = SHIFT_JIS.decode(bytes);
    if used != SHIFT_JIS {
        debug!(encoding = used.name(), "byte-order mark overrides Shift_JIS");
    }
    if had_errors {
        warn!(bytes = bytes.len(), "statement contained malformed {} sequences", used.name());
    }
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_japanese_headers() {
        let (bytes, _, _) = SHIFT_JIS.encode("利用日,利用店名・商品名,利用金額");
        assert_eq!(decode_shift_jis(&bytes), "利用日,利用店名・商品名,利用金額");
    }

    #[test]
    fn test_decodes_half_width_katakana() {
        let (bytes, _, _) = SHIFT_JIS.encode("ｾﾌﾞﾝ-ｲﾚﾌﾞﾝ");
        // half-width katakana are single bytes in Shift_JIS
        assert_eq!(bytes.len(), "ｾﾌﾞﾝ-ｲﾚﾌﾞﾝ".chars().count());
        assert_eq!(decode_shift_jis(&bytes), "ｾﾌﾞﾝ-ｲﾚﾌﾞﾝ");
    }

    #[test]
    fn test_malformed_bytes_are_replaced() {
        let text = decode_shift_jis(&[b'a', 0x81, b',']);
        assert!(text.starts_with('a'));
        assert!(text.contains('\u{FFFD}'));
    }

    #[test]
    fn test_utf8_bom_wins() {
        let bytes = "\u{FEFF}利用日".as_bytes();
        assert_eq!(decode_shift_jis(bytes), "利用日");
    }
}
