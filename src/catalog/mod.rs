//! Product catalog interface for Makai Search.
//!
//! The search index is a volatile cache of derived data; the catalog is the
//! source of truth and lives elsewhere in the storefront (product store,
//! admin back-office). This module defines the narrow boundary the index
//! consumes: the product record shape and the [`ProductSource`] trait
//! through which the full record set is fetched for a rebuild.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::catalog::CatalogError;

/// Unique identifier of a product in the storefront catalog.
///
/// Identifiers are opaque strings minted by the product store. They are
/// compared and hashed as-is; the index never interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Creates a product identifier from its string form.
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The subset of a product document consumed by the search index.
///
/// The index derives tokens from `title`, `description`, and `tags` only.
/// Callers normalize malformed upstream data (a product missing a title)
/// to empty strings before records reach the index; empty text simply
/// contributes zero tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Unique product identifier.
    pub id: ProductId,

    /// Product title, free text.
    pub title: String,

    /// Product description, free text.
    pub description: String,

    /// Short tag strings. Each tag is indexed as a single atomic token.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ProductRecord {
    /// Creates a product record from its parts.
    pub fn new<I, T, D>(id: I, title: T, description: D, tags: Vec<String>) -> Self
    where
        I: Into<ProductId>,
        T: Into<String>,
        D: Into<String>,
    {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            tags,
        }
    }
}

/// Boundary to the storefront's product store.
///
/// Implemented by whatever owns the catalog (a database-backed store in
/// production, a fixture in tests). The search service calls `fetch_all`
/// on every refresh; the full record set is supplied wholesale so a
/// rebuild can be a hard reset rather than a merge.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetches every product record that should be indexed.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<ProductRecord>)` - The current catalog contents.
    /// * `Err(CatalogError)` - If the product store could not be queried.
    async fn fetch_all(&self) -> Result<Vec<ProductRecord>, CatalogError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_roundtrip() {
        let id = ProductId::new("prod_123");
        assert_eq!(id.as_str(), "prod_123");
        assert_eq!(id.to_string(), "prod_123");
        assert_eq!(ProductId::from("prod_123"), id);
    }

    #[test]
    fn test_product_record_serde() {
        let json = r#"{
            "id": "prod_1",
            "title": "React E-commerce Template",
            "description": "Full storefront starter",
            "tags": ["react", "typescript"]
        }"#;

        let record: ProductRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, ProductId::new("prod_1"));
        assert_eq!(record.title, "React E-commerce Template");
        assert_eq!(record.tags, vec!["react", "typescript"]);

        // Tags are optional on the wire
        let json = r#"{"id": "prod_2", "title": "t", "description": "d"}"#;
        let record: ProductRecord = serde_json::from_str(json).unwrap();
        assert!(record.tags.is_empty());
    }
}
