//! Tokenization for the Koa Product Trie.
//!
//! Tokens are derived from a product's title, description, and tags only.
//! Title and description text is split on runs of whitespace and each word
//! lower-cased; tag strings are lower-cased but kept whole, so a tag like
//! `"full-stack"` is one token and is reachable from the prefix `"full"`
//! but never from `"stack"`.
//!
//! Lower-casing is Unicode-aware and the trie walks tokens one `char`
//! (Unicode scalar value) at a time, so non-Latin text is handled without
//! byte-level corruption.

use crate::catalog::ProductRecord;

/// Splits free text into lower-cased word tokens.
///
/// Runs of whitespace collapse; empty strings are never produced. This is
/// the same splitting the query layer applies to user input, which keeps
/// indexed tokens and query words aligned.
pub fn tokenize_text(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().map(str::to_lowercase)
}

/// Produces every token a product record contributes to the index.
///
/// Title words, then description words, then tags. The order is not
/// observable in the built trie; insertion is idempotent per
/// (token, product) pair.
pub fn tokenize_product(record: &ProductRecord) -> impl Iterator<Item = String> + '_ {
    tokenize_text(&record.title)
        .chain(tokenize_text(&record.description))
        .chain(record.tags.iter().map(|tag| tag.to_lowercase()))
}
