// Copyright 2025 Cowboy AI, LLC.

//! Weighted aggregation across a variable number of parent breeds

/// Round to a fixed number of decimal places (half away from zero)
///
/// Precision is capped at [`f64::DIGITS`] places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let places = decimals.min(f64::DIGITS);
    let factor = 10f64.powi(places as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Percentage-weighted sum over the parents that carry a value
///
/// Each item is `(value, percentage)`. Parents whose value is `None` are
/// skipped and their percentage is NOT redistributed to the others, so a
/// field present on only one of two 60/40 parents yields `value * 0.6`.
/// Returns `None` when no parent carries a value.
///
/// # Examples
///
/// ```rust
/// use breed_resolution::aggregation::weighted_sum;
///
/// assert_eq!(weighted_sum([(Some(10.0), 60.0), (Some(20.0), 40.0)], 2), Some(14.0));
/// assert_eq!(weighted_sum([(Some(10.0), 60.0), (None, 40.0)], 2), Some(6.0));
/// assert_eq!(weighted_sum([(None, 60.0), (None, 40.0)], 2), None);
/// ```
pub fn weighted_sum<I>(values: I, decimals: u32) -> Option<f64>
where
    I: IntoIterator<Item = (Option<f64>, f64)>,
{
    let mut total: Option<f64> = None;
    for (value, percentage) in values {
        if let Some(value) = value {
            *total.get_or_insert(0.0) += value * percentage / 100.0;
        }
    }
    total.map(|sum| round_to(sum, decimals))
}

/// Join the present, non-blank texts in order
pub fn join_present<'a, I>(values: I, separator: &str) -> Option<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let parts: Vec<&str> = values
        .into_iter()
        .flatten()
        .filter(|text| !text.trim().is_empty())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(separator))
    }
}

/// Concatenate tag lists in order, skipping blank tags
pub fn concat_tags<'a, I>(lists: I) -> Option<Vec<String>>
where
    I: IntoIterator<Item = &'a [String]>,
{
    let tags: Vec<String> = lists
        .into_iter()
        .flatten()
        .filter(|tag| !tag.trim().is_empty())
        .cloned()
        .collect();

    if tags.is_empty() {
        None
    } else {
        Some(tags)
    }
}
