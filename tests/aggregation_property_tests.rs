// Copyright 2025 Cowboy AI, LLC.

use breed_resolution::aggregation::{round_to, weighted_sum};
use breed_resolution::{
    compose_custom_breed, BreedId, BreedProfile, CustomBreedDefinition, CustomBreedId,
    ParentBreedTrace, ResolverConfig, Sex, WeightRange,
};
use proptest::prelude::*;

fn weight() -> impl Strategy<Value = Option<f64>> {
    proptest::option::of(1.0f64..120.0)
}

fn parent() -> impl Strategy<Value = (Option<f64>, f64)> {
    (weight(), 0.0f64..=100.0)
}

proptest! {
    #[test]
    fn weighted_sum_is_none_only_without_values(
        parents in proptest::collection::vec(parent(), 0..=3)
    ) {
        let result = weighted_sum(parents.clone(), 2);
        prop_assert_eq!(result.is_none(), parents.iter().all(|(v, _)| v.is_none()));
    }

    #[test]
    fn weighted_sum_is_already_rounded(parents in proptest::collection::vec(parent(), 1..=3)) {
        if let Some(sum) = weighted_sum(parents, 2) {
            prop_assert_eq!(round_to(sum, 2), sum);
        }
    }

    #[test]
    fn absent_parents_contribute_nothing(
        present in proptest::collection::vec((1.0f64..120.0, 0.0f64..=100.0), 1..=2),
        absent_percentage in 0.0f64..=100.0,
    ) {
        let mut with_absent: Vec<(Option<f64>, f64)> =
            present.iter().map(|(v, p)| (Some(*v), *p)).collect();
        let without_absent = with_absent.clone();
        with_absent.push((None, absent_percentage));

        prop_assert_eq!(weighted_sum(with_absent, 2), weighted_sum(without_absent, 2));
    }

    #[test]
    fn compose_is_deterministic(
        male in proptest::collection::vec((weight(), weight(), 0.0f64..=100.0), 0..=3),
    ) {
        let parents: Vec<ParentBreedTrace> = male
            .iter()
            .map(|(min, max, percentage)| ParentBreedTrace {
                breed: BreedProfile::new(BreedId::new(), "Parent").with_weight(
                    Sex::Male,
                    WeightRange { adult_min: *min, adult_max: *max, ..WeightRange::default() },
                ),
                percentage: *percentage,
            })
            .collect();
        let definition = CustomBreedDefinition::new(CustomBreedId::new(), "Mix");
        let config = ResolverConfig::default();

        let first = compose_custom_breed(&definition, parents.clone(), &config);
        let second = compose_custom_breed(&definition, parents, &config);
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
        prop_assert!(first.weight_for(Sex::Female).is_empty());
    }
}
