use super::common::*;
use crate::matching::domain::{CapabilityProfile, ServiceType};
use crate::matching::{match_and_rank, rank, MatchEngine, MatchingConfig};

fn names(results: &[crate::matching::MatchResult]) -> Vec<&str> {
    results.iter().map(|result| result.profile.name()).collect()
}

fn mixed_catalog() -> Vec<CapabilityProfile> {
    vec![
        profile("Weak", [1.0, 1.0, 1.0, 1.0], 4000, &["long_term"]),
        profile("Strong", [5.0, 5.0, 5.0, 5.0], 4000, &["long_term"]),
        profile("Day Only", [5.0, 5.0, 5.0, 5.0], 1000, &["day_care"]),
        profile("Pricey", [5.0, 5.0, 5.0, 5.0], 8000, &["long_term", "short_term"]),
        profile("Middling", [3.0, 3.0, 3.0, 3.0], 3000, &["long_term", "day_care"]),
    ]
}

#[test]
fn empty_catalog_yields_empty_shortlist() {
    let results = match_and_rank(
        &need([3.0, 3.0, 3.0, 3.0], 5000),
        &[],
        &ServiceType::long_term(),
    );
    assert!(results.is_empty());
}

#[test]
fn shortlist_is_sorted_and_truncated() {
    let results = engine().match_and_rank(
        &need([4.0, 4.0, 4.0, 4.0], 5000),
        &mixed_catalog(),
        &ServiceType::long_term(),
    );

    assert_eq!(results.len(), 3);
    assert_eq!(names(&results), vec!["Strong", "Pricey", "Middling"]);
    assert!(results
        .windows(2)
        .all(|pair| pair[0].total_match_score >= pair[1].total_match_score));
}

#[test]
fn ineligible_facilities_never_appear() {
    let results = engine().match_and_rank(
        &need([4.0, 4.0, 4.0, 4.0], 5000),
        &mixed_catalog(),
        &ServiceType::long_term(),
    );

    assert!(results
        .iter()
        .all(|result| result.profile.name() != "Day Only"));
}

#[test]
fn fewer_eligible_than_top_k_returns_all_eligible() {
    let results = engine().match_and_rank(
        &need([2.0, 2.0, 2.0, 2.0], 5000),
        &mixed_catalog(),
        &ServiceType::day_care(),
    );

    assert_eq!(names(&results), vec!["Day Only", "Middling"]);
}

#[test]
fn ties_keep_catalog_order() {
    let catalog = vec![
        profile("First", [4.0, 4.0, 4.0, 4.0], 3000, &["long_term"]),
        profile("Second", [4.0, 4.0, 4.0, 4.0], 3000, &["long_term"]),
        profile("Third", [4.0, 4.0, 4.0, 4.0], 3000, &["long_term"]),
        profile("Fourth", [4.0, 4.0, 4.0, 4.0], 3000, &["long_term"]),
    ];

    let results = engine().match_and_rank(
        &need([2.0, 2.0, 2.0, 2.0], 5000),
        &catalog,
        &ServiceType::long_term(),
    );

    assert_eq!(names(&results), vec!["First", "Second", "Third"]);
}

#[test]
fn configured_top_k_limits_results() {
    let config = MatchingConfig {
        top_k: 1,
        ..MatchingConfig::default()
    };
    let engine = MatchEngine::new(config);

    let results = engine.match_and_rank(
        &need([4.0, 4.0, 4.0, 4.0], 5000),
        &mixed_catalog(),
        &ServiceType::long_term(),
    );

    assert_eq!(names(&results), vec!["Strong"]);
}

#[test]
fn shortlist_uses_service_type_from_need() {
    let mut need = need([2.0, 2.0, 2.0, 2.0], 5000);
    need.service_type = ServiceType::short_term();

    let results = engine().shortlist(&need, &mixed_catalog());

    assert_eq!(names(&results), vec!["Pricey"]);
}

#[test]
fn rank_orders_precomputed_results() {
    let engine = engine();
    let need = need([4.0, 4.0, 4.0, 4.0], 5000);
    let scored = mixed_catalog()
        .iter()
        .filter_map(|facility| engine.score(&need, facility, &ServiceType::long_term()))
        .collect::<Vec<_>>();

    let ranked = rank(scored, 10);

    assert_eq!(names(&ranked), vec!["Strong", "Pricey", "Middling", "Weak"]);
}

#[test]
fn ranking_is_deterministic() {
    let need = need([3.5, 2.0, 4.5, 1.5], 4500);
    let first = match_and_rank(&need, &mixed_catalog(), &ServiceType::long_term());
    let second = match_and_rank(&need, &mixed_catalog(), &ServiceType::long_term());
    assert_eq!(first, second);
}
