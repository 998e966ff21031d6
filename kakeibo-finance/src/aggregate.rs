//! One classification pass over a statement's rows.

use kakeibo_core::{
    Categories, CategoryName, CategoryTotal, FALLBACK_COLUMN_INDEX, MERCHANT, Row, USAGE_AMOUNT,
    clean_amount,
};
use tracing::{debug, info};

use crate::gate::{self, Rejection};
use crate::normalize::{normalize_key, normalize_row};
use crate::rules::match_category;

/// Running totals for the six categories during a single pass.
#[derive(Debug, Clone)]
pub struct Aggregator {
    fallback_column: Option<String>,
    totals: Vec<CategoryTotal>,
    skipped: usize,
}

impl Aggregator {
    /// Start an empty pass. `fallback_column` is the payment column used for
    /// その他 totals; `None` makes every その他 contribution zero.
    pub fn new(fallback_column: Option<String>) -> Self {
        Self {
            fallback_column,
            totals: CategoryName::ALL.into_iter().map(CategoryTotal::new).collect(),
            skipped: 0,
        }
    }

    /// Classify one normalized row into the category it lands in. A row the
    /// gate rejects is counted and otherwise ignored.
    pub fn add(&mut self, row: Row) -> Result<CategoryName, Rejection> {
        if let Err(reason) = gate::check(&row) {
            self.skipped += 1;
            return Err(reason);
        }

        let merchant = row.get(MERCHANT).unwrap_or_default();
        let amount = clean_amount(row.get(USAGE_AMOUNT).unwrap_or("0"));
        let category = match_category(merchant, amount);

        let attributed = if category.is_catch_all() {
            self.fallback_amount(&row)
        } else {
            amount
        };

        self.slot(category).push(row, attributed);
        Ok(category)
    }

    /// Rows dropped by the gate so far.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Drop empty categories and publish the result.
    pub fn finish(self) -> Categories {
        Categories::new(self.totals, self.fallback_column)
    }

    fn fallback_amount(&self, row: &Row) -> i64 {
        self.fallback_column
            .as_deref()
            .and_then(|col| row.get(col))
            .map(clean_amount)
            .unwrap_or(0)
    }

    fn slot(&mut self, name: CategoryName) -> &mut CategoryTotal {
        // totals is built from CategoryName::ALL, whose order matches the enum's
        &mut self.totals[name as usize]
    }
}

/// Payment column: the header at position 9 of the first row, normalized.
pub fn resolve_fallback_column(rows: &[Row]) -> Option<String> {
    rows.first()
        .and_then(|r| r.key_at(FALLBACK_COLUMN_INDEX))
        .map(normalize_key)
}

/// Classify a whole statement. Pure: the same rows always give the same
/// totals and item order.
pub fn classify(rows: &[Row]) -> Categories {
    let fallback_column = resolve_fallback_column(rows);
    let mut agg = Aggregator::new(fallback_column);

    for (i, raw) in rows.iter().enumerate() {
        if let Err(reason) = agg.add(normalize_row(raw)) {
            debug!(row = i + 1, ?reason, "row dropped by validity gate");
        }
    }

    let skipped = agg.skipped();
    let categories = agg.finish();
    info!(
        rows = rows.len(),
        classified = categories.row_count(),
        skipped,
        categories = categories.len(),
        "classified statement"
    );
    categories
}
