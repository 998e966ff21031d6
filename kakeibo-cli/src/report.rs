//! Text and JSON rendering of a classification result.

use anyhow::{Context, Result};
use kakeibo_core::{Categories, MERCHANT, USAGE_AMOUNT, USAGE_DATE, clean_amount};
use serde::Serialize;
use std::fmt::Write;

/// Group digits by thousands, e.g. `1234567` → `1,234,567`.
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn yen(n: i64) -> String {
    format!("{} 円", group_thousands(n))
}

pub fn render_text(file: &str, categories: &Categories, show_items: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{file}\n");

    if categories.is_empty() {
        let _ = writeln!(out, "(分類できる利用明細がありませんでした)");
        return out;
    }

    for c in categories {
        let _ = writeln!(out, "{:<14} {:>14}  ({}件)", c.name.label(), yen(c.total), c.items.len());
        if !show_items {
            continue;
        }

        let catch_all = c.name.is_catch_all();
        let mut heading = format!("    {USAGE_DATE} | {MERCHANT} | {USAGE_AMOUNT}");
        if catch_all {
            let _ = write!(heading, " | {}", categories.fallback_column_label());
        }
        let _ = writeln!(out, "{heading}");

        for item in &c.items {
            let amount = clean_amount(item.get(USAGE_AMOUNT).unwrap_or("0"));
            let _ = write!(
                out,
                "    {} | {} | {}",
                item.get(USAGE_DATE).unwrap_or_default(),
                item.get(MERCHANT).unwrap_or_default(),
                yen(amount)
            );
            if catch_all {
                let paid = categories
                    .fallback_column()
                    .and_then(|col| item.get(col))
                    .map(clean_amount)
                    .unwrap_or(0);
                let _ = write!(out, " | {}", yen(paid));
            }
            out.push('\n');
        }
        out.push('\n');
    }

    let _ = writeln!(out, "{:<14} {:>14}", "合計", yen(categories.grand_total()));
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    file: &'a str,
    #[serde(flatten)]
    categories: &'a Categories,
}

pub fn render_json(file: &str, categories: &Categories) -> Result<String> {
    serde_json::to_string_pretty(&JsonReport { file, categories }).context("serialize result")
}
