// Copyright 2025 Cowboy AI, LLC.

//! Catalog wrapper that adds metrics collection

use crate::breed::BreedProfile;
use crate::catalog::{BreedCatalog, CustomBreedStore};
use crate::custom_breed::CustomBreedDefinition;
use crate::errors::BreedResult;
use crate::identifiers::{BreedId, CustomBreedId};
use crate::instrumentation::metrics::{CatalogMetrics, MetricsTimer};
use async_trait::async_trait;

/// Catalog wrapper recording hit/miss/error counters per lookup
///
/// Counters are named `catalog.get_breed.{hit,miss,error}` and
/// `catalog.get_custom_breed.{hit,miss,error}`.
#[derive(Debug, Clone)]
pub struct InstrumentedCatalog<C> {
    inner: C,
    metrics: CatalogMetrics,
}

impl<C> InstrumentedCatalog<C> {
    /// Wrap a catalog with a fresh metrics collector
    pub fn new(inner: C) -> Self {
        Self::with_metrics(inner, CatalogMetrics::new())
    }

    /// Wrap a catalog with an existing metrics collector
    pub fn with_metrics(inner: C, metrics: CatalogMetrics) -> Self {
        Self { inner, metrics }
    }

    /// Get the metrics collector
    pub fn metrics(&self) -> &CatalogMetrics {
        &self.metrics
    }

    /// Get the inner catalog
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

async fn observe<T>(timer: MetricsTimer<'_>, result: BreedResult<T>) -> BreedResult<T> {
    let outcome = match &result {
        Ok(_) => "hit",
        Err(e) if e.is_not_found() => "miss",
        Err(_) => "error",
    };
    timer.finish(outcome).await;
    result
}

#[async_trait]
impl<C: BreedCatalog> BreedCatalog for InstrumentedCatalog<C> {
    async fn get_breed(&self, id: &BreedId) -> BreedResult<BreedProfile> {
        let timer = MetricsTimer::new(&self.metrics, "catalog.get_breed");
        observe(timer, self.inner.get_breed(id).await).await
    }
}

#[async_trait]
impl<C: CustomBreedStore> CustomBreedStore for InstrumentedCatalog<C> {
    async fn get_custom_breed(&self, id: &CustomBreedId) -> BreedResult<CustomBreedDefinition> {
        let timer = MetricsTimer::new(&self.metrics, "catalog.get_custom_breed");
        observe(timer, self.inner.get_custom_breed(id).await).await
    }
}
