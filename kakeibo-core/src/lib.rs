//! kakeibo-core: statement row model, spending categories, and field helpers
//! shared by the ingest, finance, and CLI crates.

pub mod amount;
pub mod category;
pub mod date;
pub mod row;

pub use amount::clean_amount;
pub use category::{Categories, CategoryName, CategoryTotal};
pub use date::is_usage_date;
pub use row::Row;

/// Usage date column (`YYYY/MM/DD`).
pub const USAGE_DATE: &str = "利用日";
/// Merchant / item description column used by every matching rule.
pub const MERCHANT: &str = "利用店名・商品名";
/// Usage amount column.
pub const USAGE_AMOUNT: &str = "利用金額";

/// Header position of the monthly payment column ("N月支払金額").
///
/// The column name changes with the billing month, so it is looked up by
/// position in the first row instead of by name. An export that reorders its
/// columns will silently feed the wrong figure into the その他 total.
pub const FALLBACK_COLUMN_INDEX: usize = 8;

/// Heading shown for the payment column when none could be resolved.
pub const DEFAULT_FALLBACK_LABEL: &str = "8月支払金額";
