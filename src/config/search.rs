//! Search configuration module.
//!
//! This module defines configuration for the product search service:
//! the periodic refresh backstop, how multi-word queries combine their
//! per-word result sets, and the trie's token length bound.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;

/// How a multi-word query combines the per-word result sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    /// Every word must prefix-match the product (set intersection).
    All,

    /// Any word may prefix-match the product (set union).
    Any,
}

/// Search service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Seconds between periodic index refreshes. The refresh task is a
    /// correctness backstop; event-driven refreshes on catalog mutation
    /// remain the embedding service's responsibility.
    pub refresh_interval_secs: u64,

    /// Result combination policy for multi-word queries.
    pub query_mode: QueryMode,

    /// Maximum token length in Unicode scalar values; longer tokens are
    /// truncated before indexing.
    pub max_token_chars: usize,
}

impl SearchConfig {
    /// Returns the refresh interval as a [`Duration`].
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: 300,
            query_mode: QueryMode::All,
            max_token_chars: 512,
        }
    }
}

impl Validate for SearchConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.refresh_interval_secs == 0 {
            return Err(ConfigError::ValidationError(
                "refresh_interval_secs must be greater than 0".to_string(),
            ));
        }

        if self.max_token_chars == 0 {
            return Err(ConfigError::ValidationError(
                "max_token_chars must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
