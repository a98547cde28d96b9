// Copyright 2025 Cowboy AI, LLC.

//! The unified attribute set produced by resolution
//!
//! [`ResolvedBreedInfo`] is ephemeral: it is recomputed on demand and never
//! persisted. Fields that could not be resolved are `None` and should render
//! as [`NOT_SPECIFIED`] rather than hiding the fields that were computed.

use crate::breed::{BreedProfile, Sex, WeightBySex, WeightRange};
use schemars::schema::RootSchema;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display text for an unresolved field
pub const NOT_SPECIFIED: &str = "Not specified";

/// Separator used when rendering temperament tags
pub const TEMPERAMENT_SEPARATOR: &str = ", ";

/// A parent breed that contributed to a composite resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParentBreedTrace {
    /// The fetched parent record
    pub breed: BreedProfile,
    /// Its declared percentage
    pub percentage: f64,
}

/// Unified breed attributes for either a canonical or a composite breed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedBreedInfo {
    /// Canonical breed id or custom breed id
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Whether this came from a composite definition
    pub is_custom: bool,
    /// Parents that were fetched, in declaration order (composite only)
    #[serde(default)]
    pub parent_breeds: Vec<ParentBreedTrace>,
    /// Weight brackets by sex
    pub weight_kg: WeightBySex,
    /// Temperament tags
    pub temperament: Option<Vec<String>>,
    /// Exercise needs
    pub exercise_needs: Option<String>,
    /// Trainability (canonical only)
    pub trainability: Option<String>,
    /// Coat (canonical only)
    pub coat: Option<String>,
    /// Grooming needs
    pub grooming: Option<String>,
    /// Known health issues (canonical only)
    pub common_health_issues: Option<Vec<String>>,
    /// Origin (canonical only)
    pub origin: Option<String>,
    /// Life span (canonical only)
    pub life_span_years: Option<String>,
    /// Recognising registries (canonical only)
    pub recognized_by: Option<Vec<String>>,
}

impl From<BreedProfile> for ResolvedBreedInfo {
    /// Identity mapping of a canonical profile. No rounding is applied.
    fn from(profile: BreedProfile) -> Self {
        Self {
            id: profile.id.into(),
            name: profile.name,
            is_custom: false,
            parent_breeds: Vec::new(),
            weight_kg: profile.weight_kg,
            temperament: Some(profile.temperament),
            exercise_needs: profile.exercise_needs,
            trainability: profile.trainability,
            coat: profile.coat,
            grooming: profile.grooming,
            common_health_issues: Some(profile.common_health_issues),
            origin: profile.origin,
            life_span_years: profile.life_span_years,
            recognized_by: Some(profile.recognized_by),
        }
    }
}

impl ResolvedBreedInfo {
    /// Weight brackets for one sex
    pub fn weight_for(&self, sex: Sex) -> &WeightRange {
        self.weight_kg.for_sex(sex)
    }

    /// Temperament rendered as a single string
    pub fn temperament_text(&self) -> Option<String> {
        self.temperament
            .as_ref()
            .filter(|tags| !tags.is_empty())
            .map(|tags| tags.join(TEMPERAMENT_SEPARATOR))
    }

    /// Healthy adult range for display, e.g. "10-12 kg"
    pub fn healthy_weight_text(&self, sex: Sex) -> String {
        let range = self.weight_for(sex);
        match (range.adult_min, range.adult_max) {
            (Some(min), Some(max)) => format!("{min}-{max} kg"),
            (Some(min), None) => format!("from {min} kg"),
            (None, Some(max)) => format!("up to {max} kg"),
            (None, None) => NOT_SPECIFIED.to_string(),
        }
    }

    /// Names of the parents that contributed, in order
    pub fn parent_names(&self) -> Vec<&str> {
        self.parent_breeds
            .iter()
            .map(|p| p.breed.name.as_str())
            .collect()
    }
}

/// JSON Schema of [`ResolvedBreedInfo`], for hosts that validate payloads
pub fn resolved_breed_info_schema() -> RootSchema {
    schema_for!(ResolvedBreedInfo)
}

/// Render an optional text field, falling back to [`NOT_SPECIFIED`]
pub fn display_or_not_specified(value: Option<&str>) -> &str {
    match value {
        Some(text) if !text.trim().is_empty() => text,
        _ => NOT_SPECIFIED,
    }
}
