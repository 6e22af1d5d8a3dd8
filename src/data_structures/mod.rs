//! Data structures for Makai Search.
//!
//! This module contains the specialized data structures behind the
//! storefront's search path. All implementations adhere to the project
//! requirements:
//! - No unsafe code
//! - Reads never block other reads
//! - Rebuilds publish consistent snapshots, never partial state

pub mod koa_trie;

// Re-export common data structures
pub use koa_trie::{KoaTrie, KoaTrieConfig};
