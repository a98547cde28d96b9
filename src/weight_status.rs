// Copyright 2025 Cowboy AI, LLC.

//! Weight status classification against a resolved breed

use crate::breed::{Sex, WeightRange};
use crate::resolved::ResolvedBreedInfo;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a dog's current weight sits relative to its breed's adult range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum WeightStatus {
    /// Below the adult minimum
    Underweight,
    /// Within the inclusive adult range
    Normal,
    /// Above the adult maximum
    Overweight,
    /// No usable range or weight
    Unknown,
}

impl WeightStatus {
    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            WeightStatus::Underweight => "Underweight",
            WeightStatus::Normal => "Healthy weight",
            WeightStatus::Overweight => "Overweight",
            WeightStatus::Unknown => "Unknown",
        }
    }

    /// Whether the weight is outside the healthy range
    pub fn needs_attention(&self) -> bool {
        matches!(self, WeightStatus::Underweight | WeightStatus::Overweight)
    }
}

impl fmt::Display for WeightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a weight against the resolved adult range for `sex`
///
/// Both bounds are inclusive. Returns [`WeightStatus::Unknown`] when there is
/// no resolved breed, either adult bound is missing, or the weight is not a
/// positive number.
///
/// # Examples
///
/// ```rust
/// use breed_resolution::{classify_weight, BreedId, BreedProfile, ResolvedBreedInfo, Sex,
///     WeightRange, WeightStatus};
///
/// let beagle: ResolvedBreedInfo = BreedProfile::new(BreedId::new(), "Beagle")
///     .with_weight(Sex::Female, WeightRange::adult(9.0, 10.0))
///     .into();
///
/// assert_eq!(classify_weight(9.0, Sex::Female, Some(&beagle)), WeightStatus::Normal);
/// assert_eq!(classify_weight(11.2, Sex::Female, Some(&beagle)), WeightStatus::Overweight);
/// assert_eq!(classify_weight(9.0, Sex::Male, Some(&beagle)), WeightStatus::Unknown);
/// ```
pub fn classify_weight(
    current_weight_kg: f64,
    sex: Sex,
    resolved: Option<&ResolvedBreedInfo>,
) -> WeightStatus {
    match resolved {
        Some(info) => classify_against(current_weight_kg, info.weight_for(sex)),
        None => WeightStatus::Unknown,
    }
}

/// Classify a weight against an explicit range
pub fn classify_against(current_weight_kg: f64, range: &WeightRange) -> WeightStatus {
    if !current_weight_kg.is_finite() || current_weight_kg <= 0.0 {
        return WeightStatus::Unknown;
    }
    let Some((min, max)) = range.adult_bounds() else {
        return WeightStatus::Unknown;
    };

    if current_weight_kg < min {
        WeightStatus::Underweight
    } else if current_weight_kg > max {
        WeightStatus::Overweight
    } else {
        WeightStatus::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_weights_are_unknown() {
        let range = WeightRange::adult(10.0, 12.0);
        assert_eq!(classify_against(0.0, &range), WeightStatus::Unknown);
        assert_eq!(classify_against(-3.0, &range), WeightStatus::Unknown);
        assert_eq!(classify_against(f64::NAN, &range), WeightStatus::Unknown);
        assert_eq!(classify_against(f64::INFINITY, &range), WeightStatus::Unknown);
    }

    #[test]
    fn test_missing_bound_is_unknown() {
        let range = WeightRange {
            adult_max: Some(12.0),
            ..WeightRange::default()
        };
        assert_eq!(classify_against(11.0, &range), WeightStatus::Unknown);
    }

    #[test]
    fn test_labels() {
        assert_eq!(WeightStatus::Normal.to_string(), "Healthy weight");
        assert!(WeightStatus::Overweight.needs_attention());
        assert!(!WeightStatus::Unknown.needs_attention());
    }
}
