//! kakeibo-ingest: statement file boundary. Accepts a card statement CSV,
//! decodes it from Shift_JIS, and hands back header-keyed rows.

pub mod decode;
pub mod error;
pub mod parsers;
pub mod statement;

pub use decode::decode_shift_jis;
pub use error::IngestError;
pub use parsers::rakuten_card::parse_rows;
pub use statement::{ACCEPTED_EXTENSION, ACCEPTED_MIME, check_file_type, read_statement};
