// Copyright 2025 Cowboy AI, LLC.

//! # Catalog Instrumentation
//!
//! Lookup counters and timings for the catalog collaborators. The resolver
//! itself is unaware of instrumentation; hosts wrap their catalogs in
//! [`InstrumentedCatalog`] before handing them to the resolver.

pub mod instrumented_catalog;
pub mod metrics;

pub use instrumented_catalog::InstrumentedCatalog;
pub use metrics::{CatalogMetrics, DurationStats, MetricsSummary, MetricsTimer};
