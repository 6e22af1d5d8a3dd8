//! Catalog error module.
//!
//! Errors surfaced by product catalog sources feeding the search index.
//! The index itself has no failure modes; everything here originates from
//! the storefront's product store behind the [`ProductSource`] boundary.
//!
//! [`ProductSource`]: crate::catalog::ProductSource

use thiserror::Error;

/// Errors that can occur while fetching product records from a catalog source.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Error when the product store could not be reached or rejected the query.
    #[error("Failed to fetch product records: {0}")]
    FetchFailed(String),

    /// Error when the product store returned records that could not be decoded.
    #[error("Malformed product record: {0}")]
    MalformedRecord(String),
}
