//! Node implementation for the Koa Product Trie.
//!
//! This module provides the TrieNode structure used in the Koa Trie
//! implementation. Nodes are the fundamental building blocks of the trie,
//! each holding the set of products whose tokens pass through it and
//! references to child nodes.

use fnv::{FnvHashMap, FnvHashSet};

use crate::catalog::ProductId;

/// A node in the Koa Product Trie.
///
/// Each node represents one character of an indexed token. The node
/// reachable by consuming characters `c1..ck` from the root carries the
/// identifiers of every product contributing a token that starts with
/// `c1..ck`; the root (`k = 0`) carries every indexed product.
#[derive(Debug, Default)]
pub struct TrieNode {
    /// Map of characters to child nodes. Keys are Unicode scalar values.
    pub children: FnvHashMap<char, TrieNode>,

    /// Whether some indexed token ends exactly at this node.
    pub is_terminal: bool,

    /// Products with a token passing through this node.
    pub product_ids: FnvHashSet<ProductId>,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self::default()
    }
}
