//! Rakuten Card (e-NAVI) statement CSV parser
//!
//! Header row first, then one record per transaction:
//!   利用日,利用店名・商品名,利用者,支払方法,利用金額,支払手数料,支払総額,当月請求額,8月支払金額,...
//!   2024/05/10,ｾﾌﾞﾝ-ｲﾚﾌﾞﾝ ASAKUSA,本人,1回払い,"1,500",0,"1,500","1,500","1,500"
//!
//! Cells are kept as strings; the classifier does its own cleaning.

use csv::{ReaderBuilder, Trim};
use kakeibo_core::Row;
use tracing::debug;

use crate::error::IngestError;

/// Parse decoded statement text into header-keyed rows.
///
/// Blank lines are skipped. A record shorter than the header has no entry for
/// the missing trailing columns; cells past the header are dropped.
pub fn parse_rows(text: &str) -> Result<Vec<Row>, IngestError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::None)
        .from_reader(text.as_bytes());

    let headers = rdr
        .headers()
        .map_err(|e| IngestError::Parse(e.to_string()))?
        .clone();

    let mut rows = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result.map_err(|e| IngestError::Parse(format!("record {}: {}", i + 1, e)))?;
        if record.len() != headers.len() {
            debug!(record = i + 1, fields = record.len(), headers = headers.len(), "record width differs from header");
        }
        rows.push(Row::from_pairs(headers.iter().zip(record.iter())));
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_basic_rows() {
        let text = "利用日,利用店名・商品名,利用金額\n\
                    2024/05/10,ｾﾌﾞﾝ-ｲﾚﾌﾞﾝ ASAKUSA,\"1,500\"\n\
                    2024/05/11,POVO2.0 CHARGE,3000\n";

        let rows = parse_rows(text).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("利用金額"), Some("1,500"));
        assert_eq!(rows[1].get("利用店名・商品名"), Some("POVO2.0 CHARGE"));
        assert_eq!(rows[0].keys().collect::<Vec<_>>(), vec!["利用日", "利用店名・商品名", "利用金額"]);
    }

    #[test]
    fn test_skips_blank_lines() {
        let text = "a,b\n\n1,2\n\n\n3,4\n";
        let rows = parse_rows(text).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].get("a"), Some("3"));
    }

    #[test]
    fn test_short_and_long_records() {
        let text = "a,b,c\n1\n1,2,3,4\n";
        let rows = parse_rows(text).unwrap();
        assert_eq!(rows[0].len(), 1);
        assert_eq!(rows[0].get("b"), None);
        assert_eq!(rows[1].len(), 3);
        assert_eq!(rows[1].get("c"), Some("3"));
    }

    #[test]
    fn test_cells_are_not_trimmed() {
        let text = " 利用日 ,x\n 2024/05/10,y\n";
        let rows = parse_rows(text).unwrap();
        assert_eq!(rows[0].key_at(0), Some(" 利用日 "));
        assert_eq!(rows[0].get(" 利用日 "), Some(" 2024/05/10"));
    }

    #[test]
    fn test_empty_input_has_no_rows() {
        assert!(parse_rows("").unwrap().is_empty());
        assert!(parse_rows("利用日,利用金額\n").unwrap().is_empty());
    }
}
