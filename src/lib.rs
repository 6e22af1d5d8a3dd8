//! Makai Search Library
//!
//! This library contains the in-memory prefix search index behind the
//! storefront's product search-as-you-type, together with the service
//! layer that owns it. It is a library-level component: two write
//! operations and one read operation are its entire public surface, with
//! no HTTP endpoint, no CLI, and no persisted format. The storefront's
//! listing endpoint and product store consume it as a dependency.
//!
//! # Architecture
//!
//! The library is designed with the following principles in mind:
//! - Strict component boundaries
//! - Dependency injection for testability — the index is constructed and
//!   owned explicitly, never held as ambient global state
//! - Reads that never block other reads
//! - Rebuilds that publish consistent snapshots, never partial state
//! - Comprehensive error handling and propagation for the ambient
//!   concerns around the (error-free) index itself

// Re-export public modules
pub mod catalog;
pub mod config;
pub mod data_structures;
pub mod error;
pub mod search;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Makai Search.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function
pub fn init() -> error::MakaiResult<()> {
    // Set up global error reporter with tracing
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));

    // Initialize default configuration
    config::init_default_config()?;

    Ok(())
}

/// Initialize the tracing subscriber for the embedding service.
///
/// Intended to be called once at startup by the binary that hosts the
/// search service; libraries and tests install their own subscribers.
pub fn init_logging() -> error::MakaiResult<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_line_number(true)
        .with_file(true)
        .with_thread_names(true)
        .pretty()
        .finish();

    tracing::subscriber::set_global_default(subscriber).map_err(|e| {
        error::MakaiError::Custom(format!("Failed to set global tracing subscriber: {e}"))
    })
}
