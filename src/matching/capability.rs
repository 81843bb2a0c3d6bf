use super::config::MatchingConfig;
use super::domain::{
    ActivityFrequency, CapabilityProfile, CareGrade, FacilityQuestionnaire, LocationType,
};
use super::normalize::{normalize_to_scale, round_to};

pub(crate) fn build_capability_profile(
    questionnaire: &FacilityQuestionnaire,
    config: &MatchingConfig,
) -> CapabilityProfile {
    let maxima = &config.capability_maxima;
    let scaled = |raw: u32, max: f64| {
        round_to(normalize_to_scale(f64::from(raw), max, &config.scale), 2)
    };

    CapabilityProfile {
        identity: questionnaire.identity.clone(),
        medical_score: scaled(medical_raw(questionnaire), maxima.medical),
        life_score: scaled(life_raw(questionnaire), maxima.life),
        spiritual_score: scaled(spiritual_raw(questionnaire), maxima.spiritual),
        traffic_score: scaled(traffic_raw(questionnaire), maxima.traffic),
        service_types: questionnaire.service_types.clone(),
        price: questionnaire.price,
    }
}

pub(crate) fn medical_raw(questionnaire: &FacilityQuestionnaire) -> u32 {
    let mut raw = questionnaire.rehab_equipment_types.min(5);
    if questionnaire.has_infirmary {
        raw += 5;
    }
    if questionnaire.has_emergency_response {
        raw += 3;
    }
    if questionnaire.hospital_cooperation {
        raw += 2;
    }
    raw
}

pub(crate) fn life_raw(questionnaire: &FacilityQuestionnaire) -> u32 {
    let mut raw = match questionnaire.care_grade {
        CareGrade::FullCare => 5,
        CareGrade::SemiCare => 3,
        CareGrade::SelfCare => 1,
    };
    if questionnaire.special_diet {
        raw += 2;
    }
    // rating is collected on a 1-5 scale
    raw += u32::from(questionnaire.barrier_free_score.clamp(1, 5));
    if questionnaire.safety_facilities {
        raw += 3;
    }
    raw
}

pub(crate) fn spiritual_raw(questionnaire: &FacilityQuestionnaire) -> u32 {
    let activities = match questionnaire.activity_frequency {
        ActivityFrequency::Daily => 5,
        ActivityFrequency::Weekly | ActivityFrequency::Monthly => 2,
    };
    let support = if questionnaire.psychological_support { 5 } else { 0 };
    activities + support
}

pub(crate) fn traffic_raw(questionnaire: &FacilityQuestionnaire) -> u32 {
    let mut raw = match questionnaire.location_type {
        LocationType::Center => 5,
        LocationType::Suburb => 2,
    };
    if questionnaire.public_transport {
        raw += 3;
    }
    if questionnaire.shuttle_service {
        raw += 2;
    }
    raw
}
