use super::common::*;
use crate::matching::build_capability_profile;
use crate::matching::capability::{life_raw, medical_raw, spiritual_raw, traffic_raw};
use crate::matching::domain::{ActivityFrequency, CareGrade, LocationType, ServiceType};

#[test]
fn full_service_facility_reaches_scale_ceiling() {
    let questionnaire = full_service_facility();

    assert_eq!(medical_raw(&questionnaire), 15);
    assert_eq!(life_raw(&questionnaire), 15);
    assert_eq!(spiritual_raw(&questionnaire), 10);
    assert_eq!(traffic_raw(&questionnaire), 10);

    let profile = engine().build_capability_profile(&questionnaire);
    assert_close(profile.medical_score, 5.0);
    assert_close(profile.life_score, 5.0);
    assert_close(profile.spiritual_score, 5.0);
    assert_close(profile.traffic_score, 5.0);
}

#[test]
fn basic_facility_keeps_baseline_contributions() {
    let profile = engine().build_capability_profile(&basic_facility());

    assert_close(profile.medical_score, 1.0);
    assert_close(profile.life_score, 1.53);
    assert_close(profile.spiritual_score, 1.8);
    assert_close(profile.traffic_score, 1.8);
}

#[test]
fn mixed_facility_scores_each_dimension_independently() {
    let mut questionnaire = basic_facility();
    questionnaire.has_infirmary = true;
    questionnaire.rehab_equipment_types = 2;
    questionnaire.hospital_cooperation = true;
    questionnaire.care_grade = CareGrade::SemiCare;
    questionnaire.barrier_free_score = 3;
    questionnaire.safety_facilities = true;
    questionnaire.activity_frequency = ActivityFrequency::Monthly;
    questionnaire.psychological_support = true;
    questionnaire.public_transport = true;

    let profile = engine().build_capability_profile(&questionnaire);

    assert_close(profile.medical_score, 3.4);
    assert_close(profile.life_score, 3.4);
    assert_close(profile.spiritual_score, 3.8);
    assert_close(profile.traffic_score, 3.0);
}

#[test]
fn barrier_free_rating_is_held_to_its_scale() {
    let mut questionnaire = basic_facility();
    questionnaire.barrier_free_score = 0;
    assert_eq!(life_raw(&questionnaire), 2);
    questionnaire.barrier_free_score = 9;
    assert_eq!(life_raw(&questionnaire), 6);
}

#[test]
fn only_city_center_earns_full_location_credit() {
    let mut questionnaire = basic_facility();
    assert_eq!(traffic_raw(&questionnaire), 2);
    questionnaire.location_type = LocationType::Center;
    assert_eq!(traffic_raw(&questionnaire), 5);
}

#[test]
fn identity_price_and_service_types_pass_through() {
    let questionnaire = full_service_facility();
    let profile = build_capability_profile(&questionnaire);

    assert_eq!(profile.identity, questionnaire.identity);
    assert_eq!(profile.price, 5200);
    assert!(profile.offers(&ServiceType::long_term()));
    assert!(profile.offers(&ServiceType::day_care()));
    assert!(!profile.offers(&ServiceType::short_term()));
}

#[test]
fn rebuilding_from_same_answers_is_identical() {
    let questionnaire = full_service_facility();
    assert_eq!(
        build_capability_profile(&questionnaire),
        build_capability_profile(&questionnaire)
    );
}
