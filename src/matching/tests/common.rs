use crate::matching::domain::{
    ActivityFrequency, CapabilityProfile, CareGrade, CognitiveStatus, FacilityIdentity,
    FacilityQuestionnaire, LocationType, LonelinessLevel, Mobility, NeedVector,
    PersonQuestionnaire, ServiceType, ServiceTypes,
};
use crate::matching::{MatchEngine, MatchingConfig};

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn engine() -> MatchEngine {
    MatchEngine::new(MatchingConfig::default())
}

/// Fully independent person living far from family with no visiting needs.
pub(super) fn independent_person() -> PersonQuestionnaire {
    PersonQuestionnaire {
        chronic_disease_count: 0,
        needs_monitoring: false,
        needs_rehabilitation: false,
        needs_assistive_device: false,
        eats_independently: true,
        washes_independently: true,
        mobility: Mobility::Independent,
        cognitive_status: CognitiveStatus::Unimpaired,
        loneliness: LonelinessLevel::Low,
        social_need_per_week: 0,
        family_distance_km: 20.0,
        visits_per_week: 0,
        needs_pickup: false,
        service_type: ServiceType::long_term(),
        max_budget: 5000,
    }
}

pub(super) fn high_need_person() -> PersonQuestionnaire {
    PersonQuestionnaire {
        chronic_disease_count: 5,
        needs_monitoring: true,
        needs_rehabilitation: true,
        needs_assistive_device: true,
        eats_independently: false,
        washes_independently: false,
        mobility: Mobility::Bedridden,
        cognitive_status: CognitiveStatus::Severe,
        loneliness: LonelinessLevel::High,
        social_need_per_week: 7,
        family_distance_km: 2.0,
        visits_per_week: 7,
        needs_pickup: true,
        service_type: ServiceType::long_term(),
        max_budget: 6000,
    }
}

pub(super) fn identity(name: &str) -> FacilityIdentity {
    FacilityIdentity {
        name: name.to_string(),
        address: "12 Willow Lane".to_string(),
        contact: "555-0100".to_string(),
        description: String::new(),
    }
}

pub(super) fn full_service_facility() -> FacilityQuestionnaire {
    FacilityQuestionnaire {
        identity: identity("Willow Grove"),
        has_infirmary: true,
        rehab_equipment_types: 7,
        has_emergency_response: true,
        hospital_cooperation: true,
        care_grade: CareGrade::FullCare,
        special_diet: true,
        barrier_free_score: 5,
        safety_facilities: true,
        activity_frequency: ActivityFrequency::Daily,
        psychological_support: true,
        location_type: LocationType::Center,
        public_transport: true,
        shuttle_service: true,
        service_types: tags(&["long_term", "day_care"]),
        price: 5200,
    }
}

pub(super) fn basic_facility() -> FacilityQuestionnaire {
    FacilityQuestionnaire {
        identity: identity("Birch House"),
        has_infirmary: false,
        rehab_equipment_types: 0,
        has_emergency_response: false,
        hospital_cooperation: false,
        care_grade: CareGrade::SelfCare,
        special_diet: false,
        barrier_free_score: 1,
        safety_facilities: false,
        activity_frequency: ActivityFrequency::Weekly,
        psychological_support: false,
        location_type: LocationType::Suburb,
        public_transport: false,
        shuttle_service: false,
        service_types: tags(&["short_term"]),
        price: 1800,
    }
}

pub(super) fn tags(values: &[&str]) -> ServiceTypes {
    values
        .iter()
        .map(|value| ServiceType::new(value).expect("valid tag"))
        .collect()
}

pub(super) fn profile(
    name: &str,
    scores: [f64; 4],
    price: u32,
    service_types: &[&str],
) -> CapabilityProfile {
    CapabilityProfile {
        identity: identity(name),
        medical_score: scores[0],
        life_score: scores[1],
        spiritual_score: scores[2],
        traffic_score: scores[3],
        service_types: tags(service_types),
        price,
    }
}

pub(super) fn need(values: [f64; 4], budget: u32) -> NeedVector {
    NeedVector {
        medical: values[0],
        life: values[1],
        spiritual: values[2],
        traffic: values[3],
        service_type_weight: 1.0,
        budget,
        service_type: ServiceType::long_term(),
    }
}
