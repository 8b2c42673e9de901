//! In-memory caching using moka
//!
//! Holds recently generated proposals so the proposal page can be reloaded
//! and its CSV downloaded. Entries expire; nothing is written to disk.

use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::proposal::Proposal;

/// Application cache holding generated proposals
#[derive(Clone)]
pub struct ProposalCache {
    /// Proposals (id -> Proposal)
    pub proposals: Cache<Uuid, Arc<Proposal>>,
}

impl ProposalCache {
    /// Create a new cache instance with the given bounds
    pub fn new(capacity: u64, ttl: Duration) -> Self {
        Self {
            proposals: Cache::builder()
                .max_capacity(capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.proposal_cache_capacity, config.proposal_cache_ttl)
    }

    /// Store a proposal and hand back a shared handle to it
    pub async fn insert(&self, proposal: Proposal) -> Arc<Proposal> {
        let proposal = Arc::new(proposal);
        self.proposals.insert(proposal.id, proposal.clone()).await;
        proposal
    }

    pub async fn get(&self, id: &Uuid) -> Option<Arc<Proposal>> {
        self.proposals.get(id).await
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            proposals_size: self.proposals.entry_count(),
        }
    }

    /// Invalidate all caches
    pub fn invalidate_all(&self) {
        self.proposals.invalidate_all();
        info!("All caches invalidated");
    }
}

impl Default for ProposalCache {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub proposals_size: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proposal::tests::sample_proposal;

    #[tokio::test]
    async fn test_insert_and_get() {
        let cache = ProposalCache::default();
        let stored = cache.insert(sample_proposal()).await;

        let fetched = cache.get(&stored.id).await.unwrap();
        assert_eq!(fetched.details.proposal_no, "208");
        assert!(cache.get(&Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_stats_and_invalidate() {
        let cache = ProposalCache::default();
        let stored = cache.insert(sample_proposal()).await;
        cache.proposals.run_pending_tasks().await;
        assert_eq!(cache.stats().proposals_size, 1);

        cache.invalidate_all();
        assert!(cache.get(&stored.id).await.is_none());
    }

    #[tokio::test]
    async fn test_entries_expire() {
        let cache = ProposalCache::new(10, Duration::from_millis(50));
        let stored = cache.insert(sample_proposal()).await;

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(cache.get(&stored.id).await.is_none());
    }
}
