//! Statement CSV parsers.

pub mod rakuten_card;
