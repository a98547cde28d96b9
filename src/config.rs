// Copyright 2025 Cowboy AI, LLC.

//! Resolver configuration

use crate::custom_breed::MAX_PARENTS;
use crate::errors::{BreedError, BreedResult};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Configuration for [`BreedResolver`](crate::BreedResolver) and
/// [`MemoizedResolver`](crate::MemoizedResolver)
///
/// The defaults reproduce the production behaviour; hosts normally load this
/// from their own settings file with [`ResolverConfig::from_json`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverConfig {
    /// Number of declared parents considered per composite (1..=3)
    pub max_parents: usize,
    /// Decimal places applied to aggregated weights
    pub decimals: u32,
    /// Separator joining exercise and grooming texts across parents
    pub text_separator: String,
    /// Entries kept by the memoizing resolver
    pub cache_capacity: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_parents: MAX_PARENTS,
            decimals: 2,
            text_separator: " / ".to_string(),
            cache_capacity: 256,
        }
    }
}

impl ResolverConfig {
    /// Parse and validate a JSON document; missing keys keep their defaults
    pub fn from_json(json: &str) -> BreedResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the decimal places for aggregated weights
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    /// Set the memoization capacity
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Check ranges
    pub fn validate(&self) -> BreedResult<()> {
        if self.max_parents == 0 || self.max_parents > MAX_PARENTS {
            return Err(BreedError::validation(format!(
                "maxParents must be between 1 and {MAX_PARENTS}, got {}",
                self.max_parents
            )));
        }
        if self.decimals > 6 {
            return Err(BreedError::validation(format!(
                "decimals must be at most 6, got {}",
                self.decimals
            )));
        }
        self.cache_capacity()?;
        Ok(())
    }

    /// Cache capacity as a non-zero size
    pub fn cache_capacity(&self) -> BreedResult<NonZeroUsize> {
        NonZeroUsize::new(self.cache_capacity)
            .ok_or_else(|| BreedError::validation("cacheCapacity must be greater than 0"))
    }
}
