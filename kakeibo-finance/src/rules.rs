//! Ordered category rules for card statement merchants.
//!
//! Rules are evaluated top to bottom and the first match wins. Anything no
//! rule claims falls through to その他.

use kakeibo_core::CategoryName;

/// Half-width katakana brand names as they appear on the statement.
pub const CONVENIENCE_STORES: &[&str] = &["ｾﾌﾞﾝ-ｲﾚﾌﾞﾝ", "ﾌｱﾐﾘｰﾏｰﾄ", "ﾛｰｿﾝ"];

/// Compared case-insensitively.
pub const SUBSCRIPTIONS: &[&str] = &[
    "chocoZAP",
    "ﾁｮｺｻﾞｯﾌﾟ",
    "CLAUDE.AI",
    "ADOBESYS",
    "SCRIBD.C",
    "ﾕｰﾈｸｽﾄ",
    "AMAZON WEB SERVICES",
    "GOOGLE WORKSPACE",
    "NETFLIX",
    "SPOTIFY",
];

/// Full-width, matched exactly.
pub const SUICA: &str = "Ｓｕｉｃａ";
/// Full-width, matched exactly.
pub const JCB: &str = "ＪＣＢ";
/// Largest JCB charge still counted as a small payment (yen, inclusive).
pub const SMALL_JCB_LIMIT: i64 = 1200;

/// A category and the predicate over (merchant, cleaned amount) that selects it.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub category: CategoryName,
    pub description: &'static str,
    pub matches: fn(&str, i64) -> bool,
}

pub static RULES: &[Rule] = &[
    Rule {
        category: CategoryName::ConvenienceStore,
        description: "「セブン-イレブン」「ファミリーマート」「ローソン」が店名に含まれる利用。",
        matches: is_convenience_store,
    },
    Rule {
        category: CategoryName::Povo,
        description: "「povo」が店名に含まれる利用（大文字・小文字は区別しない）。",
        matches: is_povo,
    },
    Rule {
        category: CategoryName::Suica,
        description: "「Ｓｕｉｃａ」が店名に含まれる利用。",
        matches: is_suica,
    },
    Rule {
        category: CategoryName::Subscription,
        description: "事前定義されたリスト（chocoZAP, CLAUDE.AI, Adobe等）に合致する利用。",
        matches: is_subscription,
    },
    Rule {
        category: CategoryName::SmallJcbPayment,
        description: "上記以外で1200円以下の「ＪＣＢ」利用。",
        matches: is_small_jcb_payment,
    },
];

/// Shown for the catch-all category.
pub const CATCH_ALL_DESCRIPTION: &str =
    "上記のいずれにも当てはまらない利用。合計金額はCSVの9列目（「X月支払金額」）を使用します。";

fn is_convenience_store(merchant: &str, _amount: i64) -> bool {
    CONVENIENCE_STORES.iter().any(|s| merchant.contains(s))
}

fn is_povo(merchant: &str, _amount: i64) -> bool {
    merchant.to_lowercase().contains("povo")
}

fn is_suica(merchant: &str, _amount: i64) -> bool {
    merchant.contains(SUICA)
}

fn is_subscription(merchant: &str, _amount: i64) -> bool {
    let merchant = merchant.to_uppercase();
    SUBSCRIPTIONS
        .iter()
        .any(|s| merchant.contains(&s.to_uppercase()))
}

fn is_small_jcb_payment(merchant: &str, amount: i64) -> bool {
    merchant.contains(JCB) && amount <= SMALL_JCB_LIMIT
}

/// First category whose rule matches, or その他.
pub fn match_category(merchant: &str, amount: i64) -> CategoryName {
    RULES
        .iter()
        .find(|r| (r.matches)(merchant, amount))
        .map(|r| r.category)
        .unwrap_or(CategoryName::Other)
}

/// Rule explanations in evaluation order, ending with the catch-all.
pub fn describe() -> Vec<(CategoryName, &'static str)> {
    RULES
        .iter()
        .map(|r| (r.category, r.description))
        .chain(std::iter::once((CategoryName::Other, CATCH_ALL_DESCRIPTION)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convenience_stores() {
        assert_eq!(match_category("ｾﾌﾞﾝ-ｲﾚﾌﾞﾝ ASAKUSA", 1500), CategoryName::ConvenienceStore);
        assert_eq!(match_category("ﾌｱﾐﾘｰﾏｰﾄ 上野", 300), CategoryName::ConvenienceStore);
        assert_eq!(match_category("ﾛｰｿﾝ", 0), CategoryName::ConvenienceStore);
        // full-width katakana is not the statement spelling
        assert_eq!(match_category("ローソン", 300), CategoryName::Other);
    }

    #[test]
    fn test_povo_is_case_insensitive() {
        assert_eq!(match_category("POVO2.0 CHARGE", 3000), CategoryName::Povo);
        assert_eq!(match_category("Povo topping", 330), CategoryName::Povo);
    }

    #[test]
    fn test_suica_requires_full_width() {
        assert_eq!(match_category("モバイルＳｕｉｃａ", 1000), CategoryName::Suica);
        assert_eq!(match_category("Mobile Suica", 1000), CategoryName::Other);
    }

    #[test]
    fn test_subscriptions_case_insensitive() {
        assert_eq!(match_category("CHOCOZAP", 3278), CategoryName::Subscription);
        assert_eq!(match_category("ﾁｮｺｻﾞｯﾌﾟ", 3278), CategoryName::Subscription);
        assert_eq!(match_category("claude.ai subscription", 3000), CategoryName::Subscription);
        assert_eq!(match_category("ADOBESYSTEMS", 1080), CategoryName::Subscription);
        assert_eq!(match_category("Amazon Web Services", 15), CategoryName::Subscription);
        assert_eq!(match_category("Netflix.com", 1490), CategoryName::Subscription);
        assert_eq!(match_category("ﾕｰﾈｸｽﾄ", 2189), CategoryName::Subscription);
    }

    #[test]
    fn test_small_jcb_threshold() {
        assert_eq!(match_category("ＪＣＢ 定期利用", 900), CategoryName::SmallJcbPayment);
        assert_eq!(match_category("ＪＣＢ 定期利用", 1200), CategoryName::SmallJcbPayment);
        assert_eq!(match_category("ＪＣＢ 定期利用", 1201), CategoryName::Other);
        assert_eq!(match_category("JCB 定期利用", 900), CategoryName::Other);
    }

    #[test]
    fn test_earlier_rule_wins() {
        // convenience store beats subscription
        assert_eq!(match_category("ﾛｰｿﾝ NETFLIX CARD", 1500), CategoryName::ConvenienceStore);
        // povo beats Suica
        assert_eq!(match_category("povo Ｓｕｉｃａ", 500), CategoryName::Povo);
        // Suica beats subscription and JCB
        assert_eq!(match_category("Ｓｕｉｃａ SPOTIFY ＪＣＢ", 500), CategoryName::Suica);
        // subscription beats small JCB
        assert_eq!(match_category("SPOTIFY ＪＣＢ", 980), CategoryName::Subscription);
    }

    #[test]
    fn test_rule_table_order() {
        let order: Vec<_> = RULES.iter().map(|r| r.category).collect();
        assert_eq!(
            order,
            vec![
                CategoryName::ConvenienceStore,
                CategoryName::Povo,
                CategoryName::Suica,
                CategoryName::Subscription,
                CategoryName::SmallJcbPayment,
            ]
        );
    }

    #[test]
    fn test_describe_covers_every_category() {
        let described: Vec<_> = describe().into_iter().map(|(c, _)| c).collect();
        assert_eq!(described.len(), CategoryName::ALL.len());
        for name in CategoryName::ALL {
            assert!(described.contains(&name), "{name} has no description");
        }
    }
}
