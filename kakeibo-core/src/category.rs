//! The fixed spending categories and the per-file classification result.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{DEFAULT_FALLBACK_LABEL, Row};

/// Spending categories in their fixed declaration order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CategoryName {
    #[serde(rename = "コンビニ")]
    ConvenienceStore,
    #[serde(rename = "povo")]
    Povo,
    #[serde(rename = "サブスク")]
    Subscription,
    #[serde(rename = "Suica")]
    Suica,
    #[serde(rename = "少額決済(JCB)")]
    SmallJcbPayment,
    #[serde(rename = "その他")]
    Other,
}

impl CategoryName {
    /// Declaration order; also the order of the returned result.
    pub const ALL: [CategoryName; 6] = [
        CategoryName::ConvenienceStore,
        CategoryName::Povo,
        CategoryName::Subscription,
        CategoryName::Suica,
        CategoryName::SmallJcbPayment,
        CategoryName::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CategoryName::ConvenienceStore => "コンビニ",
            CategoryName::Povo => "povo",
            CategoryName::Subscription => "サブスク",
            CategoryName::Suica => "Suica",
            CategoryName::SmallJcbPayment => "少額決済(JCB)",
            CategoryName::Other => "その他",
        }
    }

    /// The catch-all category, totalled from the payment column.
    pub fn is_catch_all(&self) -> bool {
        matches!(self, CategoryName::Other)
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Running total and member rows for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub name: CategoryName,
    /// Yen, no minor unit.
    pub total: i64,
    /// Input order.
    pub items: Vec<Row>,
}

impl CategoryTotal {
    pub fn new(name: CategoryName) -> Self {
        Self {
            name,
            total: 0,
            items: Vec::new(),
        }
    }

    /// Append `row`, adding `amount` to the total.
    pub fn push(&mut self, row: Row, amount: i64) {
        self.total = self.total.saturating_add(amount);
        self.items.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Classification result for one statement: the non-empty categories in
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Categories {
    categories: Vec<CategoryTotal>,
    fallback_column: Option<String>,
}

impl Categories {
    /// Keep only non-empty categories, ordered by declaration.
    pub fn new(mut categories: Vec<CategoryTotal>, fallback_column: Option<String>) -> Self {
        categories.retain(|c| !c.is_empty());
        categories.sort_by_key(|c| c.name);
        Self {
            categories,
            fallback_column,
        }
    }

    pub fn get(&self, name: CategoryName) -> Option<&CategoryTotal> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.categories.iter()
    }

    pub fn names(&self) -> Vec<CategoryName> {
        self.categories.iter().map(|c| c.name).collect()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of rows across all categories.
    pub fn row_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    /// Sum of category totals, saturating at the `i64` bounds like the
    /// per-category totals do.
    pub fn grand_total(&self) -> i64 {
        self.categories
            .iter()
            .fold(0i64, |acc, c| acc.saturating_add(c.total))
    }

    /// Payment column resolved from the first row, if there was one.
    pub fn fallback_column(&self) -> Option<&str> {
        self.fallback_column.as_deref()
    }

    /// Heading for the payment column in item tables.
    pub fn fallback_column_label(&self) -> &str {
        self.fallback_column().unwrap_or(DEFAULT_FALLBACK_LABEL)
    }
}

impl<'a> IntoIterator for &'a Categories {
    type Item = &'a CategoryTotal;
    type IntoIter = std::slice::Iter<'a, CategoryTotal>;

    fn into_iter(self) -> Self::IntoIter {
        self.categories.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(merchant: &str) -> Row {
        Row::from_pairs([("利用店名・商品名", merchant)])
    }

    #[test]
    fn test_labels_round_trip_through_serde() {
        for name in CategoryName::ALL {
            let json = serde_json::to_string(&name).unwrap();
            assert_eq!(json, format!("\"{}\"", name.label()));
            let back: CategoryName = serde_json::from_str(&json).unwrap();
            assert_eq!(back, name);
        }
    }

    #[test]
    fn test_push_accumulates() {
        let mut c = CategoryTotal::new(CategoryName::Povo);
        c.push(row("povo"), 3000);
        c.push(row("povo"), -500);
        assert_eq!(c.total, 2500);
        assert_eq!(c.items.len(), 2);
    }

    #[test]
    fn test_empty_categories_dropped_and_ordered() {
        let mut other = CategoryTotal::new(CategoryName::Other);
        other.push(row("x"), 10);
        let mut konbini = CategoryTotal::new(CategoryName::ConvenienceStore);
        konbini.push(row("ﾛｰｿﾝ"), 20);
        let suica = CategoryTotal::new(CategoryName::Suica);

        let cats = Categories::new(vec![other, suica, konbini], None);
        assert_eq!(cats.names(), vec![CategoryName::ConvenienceStore, CategoryName::Other]);
        assert!(cats.get(CategoryName::Suica).is_none());
        assert_eq!(cats.grand_total(), 30);
        assert_eq!(cats.row_count(), 2);
    }

    #[test]
    fn test_grand_total_saturates() {
        let mut konbini = CategoryTotal::new(CategoryName::ConvenienceStore);
        konbini.push(row("ﾛｰｿﾝ"), i64::MAX);
        let mut povo = CategoryTotal::new(CategoryName::Povo);
        povo.push(row("povo"), 1);

        let cats = Categories::new(vec![konbini, povo], None);
        assert_eq!(cats.grand_total(), i64::MAX);
    }

    #[test]
    fn test_fallback_label_default() {
        let cats = Categories::new(vec![], None);
        assert!(cats.is_empty());
        assert_eq!(cats.fallback_column_label(), "8月支払金額");

        let cats = Categories::new(vec![], Some("10月支払金額".to_string()));
        assert_eq!(cats.fallback_column_label(), "10月支払金額");
    }
}
