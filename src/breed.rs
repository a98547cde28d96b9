// Copyright 2025 Cowboy AI, LLC.

//! Canonical breed records and their weight brackets
//!
//! A [`BreedProfile`] is the authoritative, catalogued description of a breed.
//! Every numeric weight bracket is independently nullable: catalog data is
//! frequently incomplete and the resolver never fabricates missing values.

use crate::identifiers::BreedId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sex of a dog, selecting which weight brackets apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum Sex {
    /// Male dog
    Male,
    /// Female dog
    Female,
}

impl Sex {
    /// Both sexes in display order
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

/// One of the four weight measurements tracked per sex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum WeightBracket {
    /// Minimum healthy adult weight
    AdultMin,
    /// Maximum healthy adult weight
    AdultMax,
    /// Minimum expected weight at six months
    SixMonthMin,
    /// Maximum expected weight at six months
    SixMonthMax,
}

impl WeightBracket {
    /// All brackets in canonical order
    pub const ALL: [WeightBracket; 4] = [
        WeightBracket::AdultMin,
        WeightBracket::AdultMax,
        WeightBracket::SixMonthMin,
        WeightBracket::SixMonthMax,
    ];

    /// Whether this bracket describes an adult dog
    pub fn is_adult(&self) -> bool {
        matches!(self, WeightBracket::AdultMin | WeightBracket::AdultMax)
    }
}

/// Weight brackets in kilograms for one sex
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeightRange {
    /// Minimum healthy adult weight
    pub adult_min: Option<f64>,
    /// Maximum healthy adult weight
    pub adult_max: Option<f64>,
    /// Minimum weight at six months
    pub six_month_min: Option<f64>,
    /// Maximum weight at six months
    pub six_month_max: Option<f64>,
}

impl WeightRange {
    /// Adult range with no puppy data
    pub fn adult(min: f64, max: f64) -> Self {
        Self {
            adult_min: Some(min),
            adult_max: Some(max),
            ..Self::default()
        }
    }

    /// Add six-month brackets
    pub fn with_six_month(mut self, min: f64, max: f64) -> Self {
        self.six_month_min = Some(min);
        self.six_month_max = Some(max);
        self
    }

    /// Read a single bracket
    pub fn get(&self, bracket: WeightBracket) -> Option<f64> {
        match bracket {
            WeightBracket::AdultMin => self.adult_min,
            WeightBracket::AdultMax => self.adult_max,
            WeightBracket::SixMonthMin => self.six_month_min,
            WeightBracket::SixMonthMax => self.six_month_max,
        }
    }

    /// Write a single bracket
    pub fn set(&mut self, bracket: WeightBracket, value: Option<f64>) {
        match bracket {
            WeightBracket::AdultMin => self.adult_min = value,
            WeightBracket::AdultMax => self.adult_max = value,
            WeightBracket::SixMonthMin => self.six_month_min = value,
            WeightBracket::SixMonthMax => self.six_month_max = value,
        }
    }

    /// Both adult bounds, only when both are known
    pub fn adult_bounds(&self) -> Option<(f64, f64)> {
        Some((self.adult_min?, self.adult_max?))
    }

    /// True when no bracket carries a value
    pub fn is_empty(&self) -> bool {
        WeightBracket::ALL.iter().all(|b| self.get(*b).is_none())
    }
}

/// Weight brackets for both sexes
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeightBySex {
    /// Male brackets
    pub male: WeightRange,
    /// Female brackets
    pub female: WeightRange,
}

impl WeightBySex {
    /// Build from both ranges
    pub fn new(male: WeightRange, female: WeightRange) -> Self {
        Self { male, female }
    }

    /// Brackets for the given sex
    pub fn for_sex(&self, sex: Sex) -> &WeightRange {
        match sex {
            Sex::Male => &self.male,
            Sex::Female => &self.female,
        }
    }

    /// Mutable brackets for the given sex
    pub fn for_sex_mut(&mut self, sex: Sex) -> &mut WeightRange {
        match sex {
            Sex::Male => &mut self.male,
            Sex::Female => &mut self.female,
        }
    }
}

/// A catalogued breed record
///
/// # Examples
///
/// ```rust
/// use breed_resolution::{BreedId, BreedProfile, Sex, WeightRange};
///
/// let beagle = BreedProfile::new(BreedId::new(), "Beagle")
///     .with_weight(Sex::Male, WeightRange::adult(10.0, 11.0))
///     .with_exercise_needs("High");
///
/// assert_eq!(beagle.weight_kg.male.adult_max, Some(11.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BreedProfile {
    /// Catalog identifier
    pub id: BreedId,
    /// Display name
    pub name: String,
    /// Country or region of origin
    pub origin: Option<String>,
    /// Typical life span, e.g. "12-15"
    pub life_span_years: Option<String>,
    /// Ordered temperament tags
    #[serde(default)]
    pub temperament: Vec<String>,
    /// Free-text exercise needs
    pub exercise_needs: Option<String>,
    /// Free-text trainability
    pub trainability: Option<String>,
    /// Coat description
    pub coat: Option<String>,
    /// Grooming needs
    pub grooming: Option<String>,
    /// Known health issues
    #[serde(default)]
    pub common_health_issues: Vec<String>,
    /// Kennel clubs / registries recognising the breed
    #[serde(default)]
    pub recognized_by: Vec<String>,
    /// Weight brackets by sex
    #[serde(default)]
    pub weight_kg: WeightBySex,
}

impl BreedProfile {
    /// Create a profile with only identity set
    pub fn new(id: BreedId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            origin: None,
            life_span_years: None,
            temperament: Vec::new(),
            exercise_needs: None,
            trainability: None,
            coat: None,
            grooming: None,
            common_health_issues: Vec::new(),
            recognized_by: Vec::new(),
            weight_kg: WeightBySex::default(),
        }
    }

    /// Set weight brackets for one sex
    pub fn with_weight(mut self, sex: Sex, range: WeightRange) -> Self {
        *self.weight_kg.for_sex_mut(sex) = range;
        self
    }

    /// Set temperament tags
    pub fn with_temperament<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.temperament = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set exercise needs
    pub fn with_exercise_needs(mut self, needs: impl Into<String>) -> Self {
        self.exercise_needs = Some(needs.into());
        self
    }

    /// Set grooming needs
    pub fn with_grooming(mut self, grooming: impl Into<String>) -> Self {
        self.grooming = Some(grooming.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_range_accessors() {
        let mut range = WeightRange::adult(10.0, 12.0);
        assert_eq!(range.get(WeightBracket::AdultMin), Some(10.0));
        assert_eq!(range.get(WeightBracket::SixMonthMax), None);

        range.set(WeightBracket::SixMonthMax, Some(7.5));
        assert_eq!(range.six_month_max, Some(7.5));
        assert!(!range.is_empty());
        assert!(WeightRange::default().is_empty());
    }

    #[test]
    fn test_adult_bounds_require_both_values() {
        assert_eq!(WeightRange::adult(3.0, 4.0).adult_bounds(), Some((3.0, 4.0)));

        let half = WeightRange {
            adult_min: Some(3.0),
            ..WeightRange::default()
        };
        assert_eq!(half.adult_bounds(), None);
    }

    #[test]
    fn test_profile_deserializes_with_missing_fields() {
        let id = BreedId::new();
        let json = format!(
            r#"{{
                "id": "{id}",
                "name": "Vizsla",
                "origin": "Hungary",
                "lifeSpanYears": null,
                "exerciseNeeds": "Very high",
                "trainability": null,
                "coat": null,
                "grooming": null,
                "weightKg": {{ "male": {{ "adultMin": 20.0, "adultMax": 27.0,
                                          "sixMonthMin": null, "sixMonthMax": null }},
                               "female": {{ "adultMin": null, "adultMax": null,
                                            "sixMonthMin": null, "sixMonthMax": null }} }}
            }}"#
        );

        let profile: BreedProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile.id, id);
        assert!(profile.temperament.is_empty());
        assert_eq!(profile.weight_kg.for_sex(Sex::Male).adult_max, Some(27.0));
        assert_eq!(profile.weight_kg.for_sex(Sex::Female).adult_max, None);
    }
}
