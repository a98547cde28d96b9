// Copyright 2025 Cowboy AI, LLC.

//! Shared fixtures for integration tests

#![allow(dead_code)]

use breed_resolution::{
    BreedId, BreedProfile, BreedResolver, CustomBreedDefinition, CustomBreedId,
    InMemoryBreedCatalog, Sex, WeightRange,
};
use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a test-writer subscriber once per test binary
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("breed_resolution=debug"))
            .with_test_writer()
            .try_init();
    });
}

/// A breed with male and female adult ranges
pub fn breed(name: &str, male: WeightRange, female: WeightRange) -> BreedProfile {
    BreedProfile::new(BreedId::new(), name)
        .with_weight(Sex::Male, male)
        .with_weight(Sex::Female, female)
}

/// Poodle (standard) with full data
pub fn poodle() -> BreedProfile {
    let mut profile = breed(
        "Poodle",
        WeightRange::adult(20.0, 32.0).with_six_month(12.0, 18.0),
        WeightRange::adult(18.0, 27.0).with_six_month(10.0, 15.0),
    )
    .with_temperament(["Intelligent", "Active"])
    .with_exercise_needs("1 hour daily")
    .with_grooming("Professional grooming every 6 weeks");
    profile.origin = Some("Germany".to_string());
    profile.life_span_years = Some("12-15".to_string());
    profile.trainability = Some("Very high".to_string());
    profile.coat = Some("Curly".to_string());
    profile.common_health_issues = vec![
        "Hip dysplasia".to_string(),
        "Addison's disease".to_string(),
    ];
    profile.recognized_by = vec!["AKC".to_string(), "FCI".to_string()];
    profile
}

/// Labrador with full data
pub fn labrador() -> BreedProfile {
    breed(
        "Labrador Retriever",
        WeightRange::adult(29.0, 36.0).with_six_month(18.0, 23.0),
        WeightRange::adult(25.0, 32.0).with_six_month(16.0, 20.0),
    )
    .with_temperament(["Friendly", "Outgoing"])
    .with_exercise_needs("1-2 hours daily")
    .with_grooming("Weekly brushing")
}

/// A catalog pre-loaded with the given breeds
pub fn catalog_with(breeds: &[BreedProfile]) -> InMemoryBreedCatalog {
    let catalog = InMemoryBreedCatalog::new();
    for breed in breeds {
        catalog.insert_breed(breed.clone());
    }
    catalog
}

/// A composite definition over `(parent id, percentage)` pairs
pub fn composite(name: &str, parents: &[(BreedId, f64)]) -> CustomBreedDefinition {
    parents.iter().fold(
        CustomBreedDefinition::new(CustomBreedId::new(), name),
        |definition, (id, percentage)| definition.with_parent(*id, *percentage),
    )
}

/// Resolver reading both collaborators from one in-memory catalog
pub fn resolver(
    catalog: &InMemoryBreedCatalog,
) -> BreedResolver<InMemoryBreedCatalog, InMemoryBreedCatalog> {
    BreedResolver::new(catalog.clone(), catalog.clone())
}
