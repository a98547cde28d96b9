// Copyright 2025 Cowboy AI, LLC.

//! Caller-side memoization of resolution results
//!
//! The resolver is cache-free. Hosts that resolve the same breed reference
//! repeatedly (list views, dashboards) wrap it here. Entries are keyed by
//! [`ResolutionKey`], so a request carrying both ids shares the entry of the
//! canonical-only request.

use crate::catalog::{BreedCatalog, CustomBreedStore};
use crate::errors::BreedResult;
use crate::identifiers::{BreedId, CustomBreedId, ResolutionKey};
use crate::resolved::ResolvedBreedInfo;
use crate::resolver::BreedResolver;
use lru::LruCache;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// LRU-memoized wrapper around [`BreedResolver`]
///
/// Only successful results are cached. Errors propagate and are retried on
/// the next call. Stale entries must be dropped with [`invalidate`] or
/// [`clear`] when backing data changes.
///
/// [`invalidate`]: MemoizedResolver::invalidate
/// [`clear`]: MemoizedResolver::clear
pub struct MemoizedResolver<C, S> {
    resolver: BreedResolver<C, S>,
    cache: Arc<Mutex<LruCache<ResolutionKey, Option<ResolvedBreedInfo>>>>,
}

impl<C, S> MemoizedResolver<C, S>
where
    C: BreedCatalog,
    S: CustomBreedStore,
{
    /// Wrap a resolver, sizing the cache from its configuration
    pub fn new(resolver: BreedResolver<C, S>) -> BreedResult<Self> {
        let capacity = resolver.config().cache_capacity()?;
        Ok(Self {
            resolver,
            cache: Arc::new(Mutex::new(LruCache::new(capacity))),
        })
    }

    /// The wrapped resolver
    pub fn resolver(&self) -> &BreedResolver<C, S> {
        &self.resolver
    }

    /// Resolve, serving repeated keys from the cache
    pub async fn resolve(
        &self,
        breed_id: Option<&BreedId>,
        custom_breed_id: Option<&CustomBreedId>,
    ) -> BreedResult<Option<ResolvedBreedInfo>> {
        let key = ResolutionKey::new(breed_id, custom_breed_id);

        if let Some(cached) = self.cache.lock().await.get(&key) {
            debug!(reference = ?key.reference(), "Resolution served from cache");
            return Ok(cached.clone());
        }

        let resolved = self.resolver.resolve(breed_id, custom_breed_id).await?;
        self.cache.lock().await.put(key, resolved.clone());
        Ok(resolved)
    }

    /// Drop one cached entry
    pub async fn invalidate(&self, key: &ResolutionKey) -> bool {
        self.cache.lock().await.pop(key).is_some()
    }

    /// Drop every cached entry
    pub async fn clear(&self) {
        self.cache.lock().await.clear();
    }

    /// Number of cached entries
    pub async fn len(&self) -> usize {
        self.cache.lock().await.len()
    }

    /// Whether the cache is empty
    pub async fn is_empty(&self) -> bool {
        self.cache.lock().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breed::BreedProfile;
    use crate::catalog::InMemoryBreedCatalog;
    use crate::config::ResolverConfig;
    use crate::instrumentation::InstrumentedCatalog;

    fn memoized(
        catalog: InMemoryBreedCatalog,
        capacity: usize,
    ) -> MemoizedResolver<InstrumentedCatalog<InMemoryBreedCatalog>, InMemoryBreedCatalog> {
        let config = ResolverConfig::default().with_cache_capacity(capacity);
        let resolver =
            BreedResolver::with_config(InstrumentedCatalog::new(catalog.clone()), catalog, config)
                .unwrap();
        MemoizedResolver::new(resolver).unwrap()
    }

    #[tokio::test]
    async fn test_repeated_resolution_hits_cache() {
        let catalog = InMemoryBreedCatalog::new();
        let shiba = BreedProfile::new(BreedId::new(), "Shiba Inu");
        catalog.insert_breed(shiba.clone());
        let memo = memoized(catalog, 8);

        let first = memo.resolve(Some(&shiba.id), None).await.unwrap();
        let second = memo
            .resolve(Some(&shiba.id), Some(&CustomBreedId::new()))
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(memo.len().await, 1);
        let metrics = memo.resolver().catalog().metrics();
        assert_eq!(metrics.get_counter("catalog.get_breed.hit").await, 1);
    }

    #[tokio::test]
    async fn test_errors_are_not_cached() {
        let catalog = InMemoryBreedCatalog::new();
        let memo = memoized(catalog.clone(), 8);
        let id = BreedId::new();

        assert!(memo.resolve(Some(&id), None).await.unwrap_err().is_not_found());
        assert!(memo.is_empty().await);

        catalog.insert_breed(BreedProfile::new(id, "Saluki"));
        let resolved = memo.resolve(Some(&id), None).await.unwrap().unwrap();
        assert_eq!(resolved.name, "Saluki");
    }

    #[tokio::test]
    async fn test_invalidate_and_eviction() {
        let catalog = InMemoryBreedCatalog::new();
        let ids: Vec<BreedId> = (0..3).map(|_| BreedId::new()).collect();
        for id in &ids {
            catalog.insert_breed(BreedProfile::new(*id, "Mutt"));
        }
        let memo = memoized(catalog, 2);

        for id in &ids {
            memo.resolve(Some(id), None).await.unwrap();
        }
        assert_eq!(memo.len().await, 2);

        assert!(memo.invalidate(&ResolutionKey::new(Some(&ids[2]), None)).await);
        assert!(!memo.invalidate(&ResolutionKey::new(Some(&ids[0]), None)).await);

        memo.clear().await;
        assert!(memo.is_empty().await);
    }

    #[tokio::test]
    async fn test_empty_reference_is_cached_as_none() {
        let memo = memoized(InMemoryBreedCatalog::new(), 4);

        assert_eq!(memo.resolve(None, None).await.unwrap(), None);
        assert_eq!(memo.len().await, 1);
    }
}
