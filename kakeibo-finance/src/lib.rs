//! kakeibo-finance: key normalization, row validity gate, the ordered
//! category rule table, and per-file aggregation.

pub mod aggregate;
pub mod gate;
pub mod normalize;
pub mod rules;

pub use aggregate::{Aggregator, classify};
pub use gate::{Rejection, is_valid};
pub use normalize::{normalize_key, normalize_row};
pub use rules::{RULES, Rule, match_category};
