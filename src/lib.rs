// Copyright 2025 Cowboy AI, LLC.

//! # Breed Resolution
//!
//! Resolves a dog's breed reference into a single, unified attribute set.
//!
//! A dog references either a catalogued (canonical) breed or a user-authored
//! composite breed built from up to three parent breeds with percentage
//! contributions and optional field overrides. This crate provides:
//! - **Data model**: [`BreedProfile`], [`CustomBreedDefinition`], [`ResolvedBreedInfo`]
//! - **Catalog seams**: [`BreedCatalog`] and [`CustomBreedStore`], injected into the engine
//! - **Resolution engine**: [`BreedResolver`], canonical mapping or weighted aggregation
//! - **Consumers**: [`classify_weight`] and [`recommend_exercise`]
//! - **Caller-side helpers**: [`MemoizedResolver`] and [`InstrumentedCatalog`]
//!
//! ## Aggregation rules
//!
//! 1. Weights are `sum(value * percentage / 100)` over the parents that carry
//!    the value, rounded to 2 decimals. Percentages are never renormalised and
//!    need not sum to 100.
//! 2. Overrides always win over computed values.
//! 3. Missing data stays `None`; nothing is fabricated.

#![warn(missing_docs)]

pub mod aggregation;
mod breed;
mod catalog;
mod config;
mod custom_breed;
mod errors;
mod exercise;
mod identifiers;
pub mod instrumentation;
mod memoized;
mod resolved;
mod resolver;
mod weight_status;

pub use breed::{BreedProfile, Sex, WeightBracket, WeightBySex, WeightRange};
pub use catalog::{BreedCatalog, CustomBreedStore, InMemoryBreedCatalog};
pub use config::ResolverConfig;
pub use custom_breed::{BreedOverrides, CustomBreedDefinition, ParentContribution, MAX_PARENTS};
pub use errors::{BreedError, BreedResult, BREED_ENTITY, CUSTOM_BREED_ENTITY};
pub use exercise::{recommend_exercise, EXERCISE_DISCLAIMER, EXERCISE_FALLBACK};
pub use identifiers::{BreedId, BreedReference, CustomBreedId, ResolutionKey};
pub use instrumentation::{CatalogMetrics, InstrumentedCatalog};
pub use memoized::MemoizedResolver;
pub use resolved::{
    display_or_not_specified, resolved_breed_info_schema, ParentBreedTrace, ResolvedBreedInfo,
    NOT_SPECIFIED, TEMPERAMENT_SEPARATOR,
};
pub use resolver::{compose_custom_breed, BreedResolver};
pub use weight_status::{classify_against, classify_weight, WeightStatus};
