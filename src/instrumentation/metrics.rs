// Copyright 2025 Cowboy AI, LLC.

//! Metrics collection for catalog lookups

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Measurements kept per operation before the oldest are discarded
const MAX_SAMPLES: usize = 1000;

/// Counters and durations for catalog operations
#[derive(Debug, Clone, Default)]
pub struct CatalogMetrics {
    counters: Arc<RwLock<HashMap<String, u64>>>,
    durations: Arc<RwLock<HashMap<String, Vec<Duration>>>>,
}

impl CatalogMetrics {
    /// Create new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment a counter
    pub async fn increment(&self, name: &str) {
        let mut counters = self.counters.write().await;
        *counters.entry(name.to_string()).or_insert(0) += 1;
    }

    /// Record operation duration
    pub async fn record_duration(&self, operation: &str, duration: Duration) {
        let mut durations = self.durations.write().await;
        let samples = durations.entry(operation.to_string()).or_default();
        samples.push(duration);
        if samples.len() > MAX_SAMPLES {
            let excess = samples.len() - MAX_SAMPLES;
            samples.drain(0..excess);
        }
    }

    /// Get counter value
    pub async fn get_counter(&self, name: &str) -> u64 {
        self.counters.read().await.get(name).copied().unwrap_or(0)
    }

    /// Get average duration for an operation
    pub async fn get_avg_duration(&self, operation: &str) -> Option<Duration> {
        let durations = self.durations.read().await;
        let samples = durations.get(operation).filter(|v| !v.is_empty())?;
        let sum: Duration = samples.iter().sum();
        Some(sum / samples.len() as u32)
    }

    /// Get all metrics as a summary
    pub async fn summary(&self) -> MetricsSummary {
        let counters = self.counters.read().await.clone();
        let durations = self
            .durations
            .read()
            .await
            .iter()
            .filter_map(|(op, samples)| {
                DurationStats::from_samples(samples).map(|s| (op.clone(), s))
            })
            .collect();

        MetricsSummary {
            counters,
            durations,
        }
    }

    /// Reset all metrics
    pub async fn reset(&self) {
        self.counters.write().await.clear();
        self.durations.write().await.clear();
    }
}

/// Summary of all metrics
#[derive(Debug, Clone)]
pub struct MetricsSummary {
    /// Counter values
    pub counters: HashMap<String, u64>,
    /// Duration statistics
    pub durations: HashMap<String, DurationStats>,
}

/// Duration statistics for an operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationStats {
    /// Number of measurements
    pub count: usize,
    /// Average duration
    pub avg: Duration,
    /// 50th percentile
    pub p50: Duration,
    /// 95th percentile
    pub p95: Duration,
    /// Minimum duration
    pub min: Duration,
    /// Maximum duration
    pub max: Duration,
}

impl DurationStats {
    fn from_samples(samples: &[Duration]) -> Option<Self> {
        let mut sorted = samples.to_vec();
        sorted.sort();
        let min = *sorted.first()?;
        let max = *sorted.last()?;
        let index = |p: f64| ((sorted.len() as f64 - 1.0) * p) as usize;
        let sum: Duration = sorted.iter().sum();

        Some(Self {
            count: sorted.len(),
            avg: sum / sorted.len() as u32,
            p50: sorted[index(0.5)],
            p95: sorted[index(0.95)],
            min,
            max,
        })
    }
}

/// Timer for measuring operation duration
pub struct MetricsTimer<'a> {
    metrics: &'a CatalogMetrics,
    operation: String,
    start: Instant,
}

impl<'a> MetricsTimer<'a> {
    /// Start timing an operation
    pub fn new(metrics: &'a CatalogMetrics, operation: &str) -> Self {
        Self {
            metrics,
            operation: operation.to_string(),
            start: Instant::now(),
        }
    }

    /// Record the elapsed time and bump `<operation>.<outcome>`
    pub async fn finish(self, outcome: &str) {
        let duration = self.start.elapsed();
        self.metrics.record_duration(&self.operation, duration).await;
        self.metrics
            .increment(&format!("{}.{}", self.operation, outcome))
            .await;
    }
}
