// Copyright 2025 Cowboy AI, LLC.

//! Composite (custom) breed definitions
//!
//! A custom breed is authored by a user from up to three catalogued parent
//! breeds, each with a percentage contribution, plus optional field-level
//! overrides. Percentages are independent: they are NOT required to sum to
//! 100 and nothing downstream normalises them, so "50 + 50 + 50" yields
//! larger aggregated weights than "33 + 33 + 34".

use crate::breed::{Sex, WeightBracket};
use crate::errors::{BreedError, BreedResult};
use crate::identifiers::{BreedId, CustomBreedId};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Maximum number of parent breeds a composite may declare
pub const MAX_PARENTS: usize = 3;

/// One parent breed and its percentage contribution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParentContribution {
    /// Referenced canonical breed
    pub parent_breed_id: BreedId,
    /// Contribution in `[0, 100]`
    pub percentage: f64,
}

impl ParentContribution {
    /// Create a contribution
    pub fn new(parent_breed_id: BreedId, percentage: f64) -> Self {
        Self {
            parent_breed_id,
            percentage,
        }
    }

    /// Percentage as a multiplier (`percentage / 100`)
    pub fn weight(&self) -> f64 {
        self.percentage / 100.0
    }
}

/// Field-level overrides that always win over computed values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BreedOverrides {
    /// Male adult minimum weight
    pub male_adult_min: Option<f64>,
    /// Male adult maximum weight
    pub male_adult_max: Option<f64>,
    /// Female adult minimum weight
    pub female_adult_min: Option<f64>,
    /// Female adult maximum weight
    pub female_adult_max: Option<f64>,
    /// Exercise needs text
    pub exercise_needs: Option<String>,
    /// Temperament text
    pub temperament: Option<String>,
    /// Grooming needs text
    pub grooming_needs: Option<String>,
}

impl BreedOverrides {
    /// Numeric override for a weight bracket
    ///
    /// Six-month brackets are never overridable and always return `None`.
    pub fn weight_override(&self, sex: Sex, bracket: WeightBracket) -> Option<f64> {
        match (sex, bracket) {
            (Sex::Male, WeightBracket::AdultMin) => self.male_adult_min,
            (Sex::Male, WeightBracket::AdultMax) => self.male_adult_max,
            (Sex::Female, WeightBracket::AdultMin) => self.female_adult_min,
            (Sex::Female, WeightBracket::AdultMax) => self.female_adult_max,
            (_, WeightBracket::SixMonthMin | WeightBracket::SixMonthMax) => None,
        }
    }

    /// Set an adult weight override
    pub fn set_weight_override(
        &mut self,
        sex: Sex,
        bracket: WeightBracket,
        value: f64,
    ) -> BreedResult<()> {
        let slot = match (sex, bracket) {
            (Sex::Male, WeightBracket::AdultMin) => &mut self.male_adult_min,
            (Sex::Male, WeightBracket::AdultMax) => &mut self.male_adult_max,
            (Sex::Female, WeightBracket::AdultMin) => &mut self.female_adult_min,
            (Sex::Female, WeightBracket::AdultMax) => &mut self.female_adult_max,
            (_, other) => {
                return Err(BreedError::validation(format!(
                    "{other:?} weight cannot be overridden"
                )))
            }
        };
        *slot = Some(value);
        Ok(())
    }

    /// True when no override is set
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// A user-authored composite breed
///
/// # Examples
///
/// ```rust
/// use breed_resolution::{BreedId, CustomBreedDefinition, CustomBreedId};
///
/// let puggle = CustomBreedDefinition::new(CustomBreedId::new(), "Puggle")
///     .with_parent(BreedId::new(), 50.0)
///     .with_parent(BreedId::new(), 50.0);
///
/// assert!(puggle.validate().is_ok());
/// assert_eq!(puggle.total_percentage(), 100.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomBreedDefinition {
    /// Definition identifier
    pub id: CustomBreedId,
    /// Display name
    pub name: String,
    /// Declared parents in order (parent 1, 2, 3)
    #[serde(default)]
    pub parents: Vec<ParentContribution>,
    /// Field overrides
    #[serde(default)]
    pub overrides: BreedOverrides,
}

impl CustomBreedDefinition {
    /// Create an empty definition
    pub fn new(id: CustomBreedId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            parents: Vec::new(),
            overrides: BreedOverrides::default(),
        }
    }

    /// Append a parent contribution
    pub fn with_parent(mut self, parent_breed_id: BreedId, percentage: f64) -> Self {
        self.parents
            .push(ParentContribution::new(parent_breed_id, percentage));
        self
    }

    /// Replace the overrides
    pub fn with_overrides(mut self, overrides: BreedOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Sum of declared percentages, for display only
    pub fn total_percentage(&self) -> f64 {
        self.parents.iter().map(|p| p.percentage).sum()
    }

    /// Check the definition is well-formed for authoring
    ///
    /// The resolver does not call this; it aggregates whatever it is given.
    pub fn validate(&self) -> BreedResult<()> {
        if self.parents.is_empty() {
            return Err(BreedError::validation(format!(
                "custom breed '{}' must declare at least one parent",
                self.name
            )));
        }
        if self.parents.len() > MAX_PARENTS {
            return Err(BreedError::validation(format!(
                "custom breed '{}' declares {} parents (max {MAX_PARENTS})",
                self.name,
                self.parents.len()
            )));
        }
        for (index, parent) in self.parents.iter().enumerate() {
            if !parent.percentage.is_finite() || !(0.0..=100.0).contains(&parent.percentage) {
                return Err(BreedError::validation(format!(
                    "parent {} percentage {} is outside [0, 100]",
                    index + 1,
                    parent.percentage
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_month_brackets_not_overridable() {
        let overrides = BreedOverrides {
            male_adult_min: Some(5.0),
            ..BreedOverrides::default()
        };
        assert_eq!(
            overrides.weight_override(Sex::Male, WeightBracket::AdultMin),
            Some(5.0)
        );
        assert_eq!(
            overrides.weight_override(Sex::Male, WeightBracket::SixMonthMin),
            None
        );
        assert_eq!(
            overrides.weight_override(Sex::Female, WeightBracket::AdultMin),
            None
        );
    }

    #[test]
    fn test_set_weight_override() {
        let mut overrides = BreedOverrides::default();
        assert!(overrides.is_empty());

        overrides
            .set_weight_override(Sex::Female, WeightBracket::AdultMax, 9.5)
            .unwrap();
        assert_eq!(overrides.female_adult_max, Some(9.5));
        assert!(!overrides.is_empty());

        let err = overrides
            .set_weight_override(Sex::Female, WeightBracket::SixMonthMax, 4.0)
            .unwrap_err();
        assert!(err.is_validation_error());
    }

    #[test]
    fn test_validate_parent_count() {
        let empty = CustomBreedDefinition::new(CustomBreedId::new(), "Nothing");
        assert!(empty.validate().is_err());

        let four = (0..4).fold(
            CustomBreedDefinition::new(CustomBreedId::new(), "Too many"),
            |def, _| def.with_parent(BreedId::new(), 25.0),
        );
        assert!(four.validate().unwrap_err().is_validation_error());
    }

    #[test]
    fn test_validate_percentage_range() {
        let def = CustomBreedDefinition::new(CustomBreedId::new(), "Bad")
            .with_parent(BreedId::new(), 120.0);
        assert!(def.validate().is_err());

        let def = CustomBreedDefinition::new(CustomBreedId::new(), "Nan")
            .with_parent(BreedId::new(), f64::NAN);
        assert!(def.validate().is_err());
    }

    #[test]
    fn test_percentages_need_not_sum_to_100() {
        let def = CustomBreedDefinition::new(CustomBreedId::new(), "Triple half")
            .with_parent(BreedId::new(), 50.0)
            .with_parent(BreedId::new(), 50.0)
            .with_parent(BreedId::new(), 50.0);

        assert!(def.validate().is_ok());
        assert_eq!(def.total_percentage(), 150.0);
    }
}
