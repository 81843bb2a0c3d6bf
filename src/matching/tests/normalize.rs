use super::common::assert_close;
use crate::matching::normalize::{normalize, round_to};
use crate::matching::{dim_score, dimension_score};
use proptest::prelude::*;

#[test]
fn normalize_maps_endpoints_onto_target_range() {
    assert_close(normalize(0.0, 15.0, 1.0, 5.0), 1.0);
    assert_close(normalize(15.0, 15.0, 1.0, 5.0), 5.0);
    assert_close(normalize(1.0, 10.0, 1.0, 5.0), 1.4);
}

#[test]
fn normalize_clamps_scores_beyond_maximum() {
    assert_close(normalize(1_000.0, 10.0, 1.0, 5.0), 5.0);
    assert_close(normalize(-3.0, 10.0, 1.0, 5.0), 1.0);
}

#[test]
fn round_to_keeps_two_decimals() {
    assert_close(round_to(2.333_333, 2), 2.33);
    assert_close(round_to(3.136, 2), 3.14);
}

#[test]
fn negligible_need_is_always_satisfied() {
    assert_eq!(dim_score(0.0, 0.05), 1.0);
    assert_eq!(dim_score(4.0, 0.05), 1.0);
    assert_eq!(dimension_score(2.0, 0.1, 0.1), 1.0);
}

proptest! {
    #[test]
    fn normalize_stays_within_range(score in 0.0f64..1.0e6, max in 0.1f64..100.0) {
        let value = normalize(score, max, 1.0, 5.0);
        prop_assert!((1.0..=5.0).contains(&value));
    }

    #[test]
    fn normalize_is_monotonic(a in 0.0f64..50.0, b in 0.0f64..50.0, max in 0.1f64..30.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(normalize(low, max, 1.0, 5.0) <= normalize(high, max, 1.0, 5.0));
    }

    #[test]
    fn dim_score_is_bounded_for_real_needs(supply in 0.001f64..10.0, need in 0.1001f64..10.0) {
        let score = dim_score(supply, need);
        prop_assert!(score > 0.0 && score <= 1.0);
    }

    #[test]
    fn oversupply_never_exceeds_full_score(need in 0.2f64..5.0, surplus in 0.0f64..5.0) {
        prop_assert_eq!(dim_score(need + surplus, need), 1.0);
    }
}
