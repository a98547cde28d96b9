// Copyright 2025 Cowboy AI, LLC.

//! Breed attribute resolution
//!
//! Turns a dog's breed reference into a single [`ResolvedBreedInfo`].
//!
//! ```mermaid
//! graph TD
//!     R[resolve] -->|breed id| C[BreedCatalog::get_breed]
//!     C -->|identity mapping| O[ResolvedBreedInfo]
//!     R -->|custom id only| S[CustomBreedStore::get_custom_breed]
//!     S --> P[fetch parents concurrently]
//!     P -->|missing parents dropped| A[weighted aggregation + overrides]
//!     A --> O
//! ```
//!
//! Errors on the requested breed propagate to the caller. Errors on parent
//! breeds are recovered: the parent simply contributes nothing.

use crate::aggregation::{concat_tags, join_present, weighted_sum};
use crate::breed::{Sex, WeightBracket, WeightBySex};
use crate::catalog::{BreedCatalog, CustomBreedStore};
use crate::config::ResolverConfig;
use crate::custom_breed::CustomBreedDefinition;
use crate::errors::BreedResult;
use crate::identifiers::{BreedId, BreedReference, CustomBreedId};
use crate::resolved::{ParentBreedTrace, ResolvedBreedInfo};
use futures::future::join_all;
use tracing::{debug, warn};

/// Resolution engine over injected catalog collaborators
///
/// The engine holds no mutable state and caches nothing; wrap it in a
/// [`MemoizedResolver`](crate::MemoizedResolver) when repeated lookups matter.
///
/// # Examples
///
/// ```rust
/// use breed_resolution::{
///     BreedId, BreedProfile, BreedResolver, CustomBreedDefinition, CustomBreedId,
///     InMemoryBreedCatalog, Sex, WeightRange,
/// };
///
/// # tokio_test::block_on(async {
/// let catalog = InMemoryBreedCatalog::new();
/// let poodle = BreedProfile::new(BreedId::new(), "Poodle")
///     .with_weight(Sex::Male, WeightRange::adult(20.0, 32.0));
/// let labrador = BreedProfile::new(BreedId::new(), "Labrador")
///     .with_weight(Sex::Male, WeightRange::adult(29.0, 36.0));
/// let labradoodle = CustomBreedDefinition::new(CustomBreedId::new(), "Labradoodle")
///     .with_parent(poodle.id, 50.0)
///     .with_parent(labrador.id, 50.0);
/// catalog.insert_breed(poodle);
/// catalog.insert_breed(labrador);
/// catalog.insert_custom_breed(labradoodle.clone());
///
/// let resolver = BreedResolver::new(catalog.clone(), catalog);
/// let resolved = resolver
///     .resolve(None, Some(&labradoodle.id))
///     .await
///     .unwrap()
///     .unwrap();
///
/// assert!(resolved.is_custom);
/// assert_eq!(resolved.weight_for(Sex::Male).adult_min, Some(24.5));
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct BreedResolver<C, S> {
    catalog: C,
    store: S,
    config: ResolverConfig,
}

impl<C, S> BreedResolver<C, S>
where
    C: BreedCatalog,
    S: CustomBreedStore,
{
    /// Create a resolver with default configuration
    pub fn new(catalog: C, store: S) -> Self {
        Self {
            catalog,
            store,
            config: ResolverConfig::default(),
        }
    }

    /// Create a resolver with explicit configuration
    ///
    /// Fails with a validation error when `config` is out of range.
    pub fn with_config(catalog: C, store: S, config: ResolverConfig) -> BreedResult<Self> {
        config.validate()?;
        Ok(Self {
            catalog,
            store,
            config,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// The injected breed catalog
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// The injected custom breed store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Resolve a dog's breed reference
    ///
    /// `breed_id` takes precedence when both ids are given. With neither id
    /// this returns `Ok(None)` without touching either collaborator.
    pub async fn resolve(
        &self,
        breed_id: Option<&BreedId>,
        custom_breed_id: Option<&CustomBreedId>,
    ) -> BreedResult<Option<ResolvedBreedInfo>> {
        match BreedReference::from_ids(breed_id.copied(), custom_breed_id.copied()) {
            Some(reference) => self.resolve_reference(&reference).await.map(Some),
            None => {
                debug!("No breed reference given, nothing to resolve");
                Ok(None)
            }
        }
    }

    /// Resolve an already-normalised reference
    pub async fn resolve_reference(
        &self,
        reference: &BreedReference,
    ) -> BreedResult<ResolvedBreedInfo> {
        debug!(%reference, "Resolving breed");
        match reference {
            BreedReference::Canonical(id) => self.resolve_canonical(id).await,
            BreedReference::Custom(id) => self.resolve_custom(id).await,
        }
    }

    /// Canonical path: a 1:1 mapping of the catalog record
    pub async fn resolve_canonical(&self, id: &BreedId) -> BreedResult<ResolvedBreedInfo> {
        let profile = self.catalog.get_breed(id).await?;
        Ok(ResolvedBreedInfo::from(profile))
    }

    /// Composite path: fetch the definition and its parents, then aggregate
    pub async fn resolve_custom(&self, id: &CustomBreedId) -> BreedResult<ResolvedBreedInfo> {
        let definition = self.store.get_custom_breed(id).await?;
        let parents = self.fetch_parents(&definition).await;

        if parents.is_empty() {
            warn!(
                custom_breed_id = %definition.id,
                declared = definition.parents.len(),
                "No parent breed could be resolved; only overrides will be populated"
            );
        }

        Ok(compose_custom_breed(&definition, parents, &self.config))
    }

    /// Fetch every declared parent concurrently, keeping declaration order
    async fn fetch_parents(&self, definition: &CustomBreedDefinition) -> Vec<ParentBreedTrace> {
        let limit = self.config.max_parents.min(definition.parents.len());
        if definition.parents.len() > limit {
            warn!(
                custom_breed_id = %definition.id,
                declared = definition.parents.len(),
                limit,
                "Ignoring parents beyond the configured limit"
            );
        }
        let declared = &definition.parents[..limit];

        let results = join_all(
            declared
                .iter()
                .map(|parent| self.catalog.get_breed(&parent.parent_breed_id)),
        )
        .await;

        declared
            .iter()
            .zip(results)
            .filter_map(|(parent, result)| match result {
                Ok(breed) => Some(ParentBreedTrace {
                    breed,
                    percentage: parent.percentage,
                }),
                Err(e) => {
                    warn!(
                        custom_breed_id = %definition.id,
                        parent_breed_id = %parent.parent_breed_id,
                        error = %e,
                        "Dropping unresolvable parent breed"
                    );
                    None
                }
            })
            .collect()
    }
}

/// Aggregate fetched parents into a composite result
///
/// Pure: the same definition and parents always produce the same output.
/// Overrides win over computed values; attributes that have no aggregation
/// rule (origin, life span, trainability, coat, health issues, registries)
/// stay `None`.
pub fn compose_custom_breed(
    definition: &CustomBreedDefinition,
    parents: Vec<ParentBreedTrace>,
    config: &ResolverConfig,
) -> ResolvedBreedInfo {
    let overrides = &definition.overrides;

    let mut weight_kg = WeightBySex::default();
    for sex in Sex::ALL {
        for bracket in WeightBracket::ALL {
            let computed = weighted_sum(
                parents
                    .iter()
                    .map(|p| (p.breed.weight_kg.for_sex(sex).get(bracket), p.percentage)),
                config.decimals,
            );
            let value = overrides.weight_override(sex, bracket).or(computed);
            weight_kg.for_sex_mut(sex).set(bracket, value);
        }
    }

    let temperament = match &overrides.temperament {
        Some(text) => Some(vec![text.clone()]),
        None => concat_tags(parents.iter().map(|p| p.breed.temperament.as_slice())),
    };

    let exercise_needs = overrides.exercise_needs.clone().or_else(|| {
        join_present(
            parents.iter().map(|p| p.breed.exercise_needs.as_deref()),
            &config.text_separator,
        )
    });

    let grooming = overrides.grooming_needs.clone().or_else(|| {
        join_present(
            parents.iter().map(|p| p.breed.grooming.as_deref()),
            &config.text_separator,
        )
    });

    ResolvedBreedInfo {
        id: definition.id.into(),
        name: definition.name.clone(),
        is_custom: true,
        parent_breeds: parents,
        weight_kg,
        temperament,
        exercise_needs,
        trainability: None,
        coat: None,
        grooming,
        common_health_issues: None,
        origin: None,
        life_span_years: None,
        recognized_by: None,
    }
}
