// Copyright 2025 Cowboy AI, LLC.

//! Exercise advice text

use crate::resolved::ResolvedBreedInfo;

/// Shown when no exercise needs are known for the breed
pub const EXERCISE_FALLBACK: &str = "Exercise needs for this breed are not specified. \
Consult your veterinarian for an exercise plan suited to your dog.";

/// Appended to every breed-specific recommendation
pub const EXERCISE_DISCLAIMER: &str =
    "Adjust activity to your dog's age, health, and fitness level.";

/// Build the exercise recommendation shown for a dog
///
/// Never returns an empty string.
///
/// ```rust
/// use breed_resolution::{recommend_exercise, EXERCISE_FALLBACK};
///
/// assert_eq!(recommend_exercise(None), EXERCISE_FALLBACK);
/// ```
pub fn recommend_exercise(resolved: Option<&ResolvedBreedInfo>) -> String {
    let needs = resolved
        .and_then(|info| info.exercise_needs.as_deref())
        .map(str::trim)
        .filter(|needs| !needs.is_empty());

    match needs {
        Some(needs) => format!("Recommended exercise: {needs}. {EXERCISE_DISCLAIMER}"),
        None => EXERCISE_FALLBACK.to_string(),
    }
}
