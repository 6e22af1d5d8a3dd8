//! Koa Product Trie implementation.
//!
//! This module provides the in-memory prefix search index behind the
//! storefront's search-as-you-type: a trie over lower-cased tokens drawn
//! from product titles, descriptions, and tags, answering prefix queries
//! with the set of matching product identifiers in time proportional to
//! the prefix length plus result size, independent of catalog size.
//!
//! The index is a volatile cache of derived data. It is never persisted;
//! it is rebuilt wholesale from the product record set whenever the
//! catalog changes meaningfully or on a periodic backstop schedule.

mod node;
mod tokenize;

use fnv::FnvHashSet;
use parking_lot::RwLock;

use crate::catalog::{ProductId, ProductRecord};
use node::TrieNode;
pub use tokenize::{tokenize_product, tokenize_text};

/// Configuration options for the Koa Product Trie.
#[derive(Debug, Clone)]
pub struct KoaTrieConfig {
    /// Maximum token length in Unicode scalar values. Longer tokens are
    /// truncated to this length before insertion, which bounds trie depth
    /// while keeping `insert` total.
    pub max_token_chars: usize,
}

impl Default for KoaTrieConfig {
    fn default() -> Self {
        Self {
            max_token_chars: 512,
        }
    }
}

/// The Koa Product Trie is an in-memory prefix index mapping every prefix
/// of every indexed token to the products whose text contains a token with
/// that prefix.
///
/// Key properties:
/// * Case-insensitive: tokens and queries are lower-cased (Unicode-aware).
/// * Character-level: trie edges are `char`s, so multi-byte text is safe.
/// * Prefix lookup is O(prefix length) plus the cost of copying the
///   result set; it never scans the catalog.
/// * Rebuild is a hard reset: a fresh trie is constructed off to the side
///   and published by swapping the root, so stale tokens from deleted or
///   edited products cannot linger and concurrent readers always observe
///   a consistent snapshot.
///
/// The trie carries no ambient instance; it is constructed and owned
/// explicitly by the service that needs search (see
/// [`SearchService`](crate::search::SearchService)).
///
/// # Examples
///
/// ```
/// use makai_search_lib::catalog::{ProductId, ProductRecord};
/// use makai_search_lib::data_structures::koa_trie::KoaTrie;
///
/// let trie = KoaTrie::new();
/// trie.rebuild(&[ProductRecord::new(
///     "p1",
///     "React E-commerce Template",
///     "Complete storefront starter",
///     vec!["react".to_string(), "typescript".to_string()],
/// )]);
///
/// let hits = trie.search("rea");
/// assert!(hits.contains(&ProductId::new("p1")));
/// assert!(trie.search("xyz").is_empty());
/// ```
#[derive(Debug)]
pub struct KoaTrie {
    /// The root node. The only shared mutable state; a rebuild replaces it
    /// wholesale under a brief write lock.
    root: RwLock<TrieNode>,

    /// Configuration options.
    config: KoaTrieConfig,
}

impl KoaTrie {
    /// Creates a new empty trie with default configuration.
    pub fn new() -> Self {
        Self::with_config(KoaTrieConfig::default())
    }

    /// Creates a new empty trie with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: KoaTrieConfig) -> Self {
        Self {
            root: RwLock::new(TrieNode::new()),
            config,
        }
    }

    /// Inserts a single (token, product) pair into the index.
    ///
    /// The token is lower-cased; one child node per character is walked or
    /// created, and the product identifier is added to every node along
    /// the path, the root and the final node included. The final node is
    /// marked terminal.
    ///
    /// Inserting the same pair twice leaves the structure unchanged (set
    /// semantics dedupe). A token that is empty after normalization is a
    /// no-op; the tokenizer never produces one.
    ///
    /// # Arguments
    ///
    /// * `token` - A single word or tag string.
    /// * `id` - The identifier of the contributing product.
    pub fn insert(&self, token: &str, id: ProductId) {
        let mut root = self.root.write();
        Self::insert_token(&mut root, token, &id, self.config.max_token_chars);
    }

    /// Returns the set of products having at least one token starting with
    /// the given prefix.
    ///
    /// The prefix is lower-cased and walked one character at a time from
    /// the root; a missing child short-circuits to the empty set. The
    /// empty prefix returns every indexed product. Read-only and safe to
    /// call concurrently with other reads.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The prefix to look up.
    pub fn search(&self, prefix: &str) -> FnvHashSet<ProductId> {
        let normalized = prefix.to_lowercase();

        let root = self.root.read();
        let mut current = &*root;
        for c in normalized.chars() {
            match current.children.get(&c) {
                Some(child) => current = child,
                None => return FnvHashSet::default(),
            }
        }

        current.product_ids.clone()
    }

    /// Rebuilds the index from the given product record set.
    ///
    /// A fresh trie is constructed off to the side with no lock held, then
    /// published by swapping the root under a brief write lock. This is a
    /// hard reset, not a merge: tokens from products absent from the input
    /// are gone afterwards. Searches that begin after `rebuild` returns
    /// observe the rebuilt state; searches concurrent with the rebuild
    /// observe the previous snapshot.
    ///
    /// Product order has no observable effect on the end state. Cost is
    /// O(total characters across all indexed text).
    ///
    /// # Arguments
    ///
    /// * `products` - The full catalog to index.
    pub fn rebuild(&self, products: &[ProductRecord]) {
        let mut fresh = TrieNode::new();
        for product in products {
            for token in tokenize_product(product) {
                Self::insert_token(&mut fresh, &token, &product.id, self.config.max_token_chars);
            }
        }

        *self.root.write() = fresh;
    }

    /// Returns the number of distinct products currently indexed.
    pub fn product_count(&self) -> usize {
        self.root.read().product_ids.len()
    }

    /// Returns `true` if no products are indexed.
    pub fn is_empty(&self) -> bool {
        let root = self.root.read();
        root.product_ids.is_empty() && root.children.is_empty()
    }

    /// Returns the number of distinct indexed tokens.
    ///
    /// This requires traversing the entire trie, so it's an O(n) operation.
    pub fn token_count(&self) -> usize {
        fn count(node: &TrieNode) -> usize {
            let mut total = usize::from(node.is_terminal);
            for child in node.children.values() {
                total += count(child);
            }
            total
        }

        count(&self.root.read())
    }

    /// Inserts one normalized token path into the given root.
    ///
    /// Shared by `insert` (under the write lock) and `rebuild` (building
    /// off to the side). The guard against empty tokens keeps the root set
    /// equal to the set of products that contributed at least one token.
    fn insert_token(root: &mut TrieNode, token: &str, id: &ProductId, max_chars: usize) {
        let normalized = token.to_lowercase();
        if normalized.is_empty() {
            return;
        }

        root.product_ids.insert(id.clone());

        let mut current = root;
        for c in normalized.chars().take(max_chars) {
            current = current.children.entry(c).or_default();
            current.product_ids.insert(id.clone());
        }

        current.is_terminal = true;
    }
}

impl Default for KoaTrie {
    fn default() -> Self {
        Self::new()
    }
}
