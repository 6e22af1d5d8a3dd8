//! Product search service for Makai Search.
//!
//! The service owns the prefix index and controls its lifecycle. The trie
//! itself is a module-agnostic data structure; everything that makes it a
//! *product search* lives here: fetching the catalog through the
//! [`ProductSource`] boundary, rebuilding on demand and on a periodic
//! backstop schedule, and turning a raw user query into a combined result
//! set for the listing endpoint.
//!
//! There is deliberately no ambient instance of the index anywhere in the
//! crate. The embedding service constructs a `SearchService`, holds it for
//! its lifetime, and wires refresh triggers into its own catalog mutation
//! paths.

use std::sync::Arc;

use fnv::FnvHashSet;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::catalog::{ProductId, ProductSource};
use crate::config::{QueryMode, SearchConfig};
use crate::data_structures::koa_trie::{tokenize_text, KoaTrie, KoaTrieConfig};
use crate::error::{report_error, ErrorContext, MakaiResult};

/// Search service owning the product prefix index.
///
/// Two write paths (`refresh`, and the trie's own `insert` for callers
/// that index incrementally between refreshes) and one read path
/// (`query`). Reads are never blocked by other reads; a refresh builds
/// its trie off to the side and publishes it with a pointer-swap-style
/// root replacement, so in-flight queries complete against the previous
/// snapshot.
pub struct SearchService {
    /// The prefix index. Owned exclusively by this service.
    trie: KoaTrie,

    /// The storefront's product store.
    source: Arc<dyn ProductSource>,

    /// Service configuration.
    config: SearchConfig,
}

impl SearchService {
    /// Creates a search service with an empty index.
    ///
    /// The index stays empty until the first [`refresh`](Self::refresh);
    /// callers that want results immediately should refresh right after
    /// construction.
    ///
    /// # Arguments
    ///
    /// * `source` - The product store to fetch catalog contents from.
    /// * `config` - Service configuration.
    pub fn new(source: Arc<dyn ProductSource>, config: SearchConfig) -> Self {
        let trie = KoaTrie::with_config(KoaTrieConfig {
            max_token_chars: config.max_token_chars,
        });

        Self {
            trie,
            source,
            config,
        }
    }

    /// Returns the underlying prefix index.
    ///
    /// Exposed for callers that need single-word `search` or incremental
    /// `insert` between refreshes.
    pub fn index(&self) -> &KoaTrie {
        &self.trie
    }

    /// Fetches the full catalog and rebuilds the index from it.
    ///
    /// On success returns the number of products indexed. On failure the
    /// previous snapshot keeps serving queries and the error propagates
    /// to the caller.
    pub async fn refresh(&self) -> MakaiResult<usize> {
        let products = self.source.fetch_all().await?;
        self.trie.rebuild(&products);

        info!(products = products.len(), "product search index rebuilt");
        Ok(products.len())
    }

    /// Answers a raw user query with a set of candidate product identifiers.
    ///
    /// The query is split into lower-cased words with the same tokenizer
    /// used at indexing time; each word is a prefix lookup, and the
    /// per-word sets combine per [`SearchConfig::query_mode`]: `All`
    /// intersects, `Any` unions. A query with no words returns the empty
    /// set — listing the whole catalog is the endpoint's job, not the
    /// index's.
    ///
    /// The endpoint fetches full product records for the returned
    /// identifiers and applies its own ranking.
    pub fn query(&self, raw: &str) -> FnvHashSet<ProductId> {
        let mut words = tokenize_text(raw);

        let Some(first) = words.next() else {
            return FnvHashSet::default();
        };

        let mut results = self.trie.search(&first);
        for word in words {
            if results.is_empty() && self.config.query_mode == QueryMode::All {
                break;
            }

            let word_hits = self.trie.search(&word);
            match self.config.query_mode {
                QueryMode::All => results.retain(|id| word_hits.contains(id)),
                QueryMode::Any => results.extend(word_hits),
            }
        }

        debug!(query = raw, hits = results.len(), "prefix query answered");
        results
    }

    /// Spawns the periodic refresh backstop.
    ///
    /// The task refreshes immediately, then at
    /// [`SearchConfig::refresh_interval`] cadence. Refresh failures are
    /// reported through the error-reporting hook and the task keeps
    /// running; the index continues serving its last good snapshot.
    ///
    /// Event-driven refreshes on catalog mutation remain the embedding
    /// service's responsibility; this task only bounds how stale the
    /// index can get if a mutation path forgets to refresh.
    pub fn spawn_refresh_task(self: Arc<Self>) -> JoinHandle<()> {
        let service = self;

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(service.config.refresh_interval());
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                interval.tick().await;

                if let Err(error) = service.refresh().await {
                    report_error(
                        ErrorContext::new(error, "search_service")
                            .with_details("periodic index refresh failed; serving last snapshot"),
                    );
                }
            }
        })
    }
}

impl std::fmt::Debug for SearchService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchService")
            .field("trie", &self.trie)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
