//! Reading a statement file from disk.

use kakeibo_core::Row;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::decode::decode_shift_jis;
use crate::error::IngestError;
use crate::parsers::rakuten_card::parse_rows;

/// Declared content type accepted for uploads.
pub const ACCEPTED_MIME: &str = "text/csv";
/// File extension accepted for uploads (case-sensitive).
pub const ACCEPTED_EXTENSION: &str = "csv";

/// Accept a file if its declared type is CSV or its name ends in `.csv`.
pub fn check_file_type(path: &Path, declared_mime: Option<&str>) -> Result<(), IngestError> {
    if declared_mime == Some(ACCEPTED_MIME) {
        return Ok(());
    }
    let has_csv_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(&format!(".{ACCEPTED_EXTENSION}")));
    if has_csv_name {
        Ok(())
    } else {
        Err(IngestError::WrongFileType)
    }
}

/// Check, read, decode, and parse one statement file.
///
/// Nothing is returned unless every step succeeds.
pub fn read_statement(path: &Path, declared_mime: Option<&str>) -> Result<Vec<Row>, IngestError> {
    check_file_type(path, declared_mime)?;

    let bytes = fs::read(path).map_err(|e| IngestError::Read(format!("{}: {}", path.display(), e)))?;
    let text = decode_shift_jis(&bytes);
    let rows = parse_rows(&text)?;

    info!(path = %path.display(), bytes = bytes.len(), rows = rows.len(), "read statement");
    Ok(rows)
}
