use super::config::{DistanceTiers, MatchingConfig};
use super::domain::{CognitiveStatus, LonelinessLevel, Mobility, NeedVector, PersonQuestionnaire};
use super::normalize::{normalize_to_scale, round_to};

pub(crate) fn build_need_vector(
    questionnaire: &PersonQuestionnaire,
    config: &MatchingConfig,
) -> NeedVector {
    let maxima = &config.need_maxima;
    let scaled = |raw: u32, max: f64| {
        round_to(normalize_to_scale(f64::from(raw), max, &config.scale), 2)
    };

    NeedVector {
        medical: scaled(medical_raw(questionnaire), maxima.medical),
        life: scaled(life_raw(questionnaire), maxima.life),
        spiritual: scaled(spiritual_raw(questionnaire), maxima.spiritual),
        traffic: scaled(
            traffic_raw(questionnaire, &config.distance_tiers),
            maxima.traffic,
        ),
        service_type_weight: 1.0,
        budget: questionnaire.max_budget,
        service_type: questionnaire.service_type.clone(),
    }
}

pub(crate) fn medical_raw(questionnaire: &PersonQuestionnaire) -> u32 {
    let mut raw = questionnaire.chronic_disease_count.min(3) * 2;
    if questionnaire.needs_monitoring {
        raw += 3;
    }
    if questionnaire.needs_rehabilitation {
        raw += 3;
    }
    if questionnaire.needs_assistive_device {
        raw += 3;
    }
    raw
}

pub(crate) fn life_raw(questionnaire: &PersonQuestionnaire) -> u32 {
    let mut raw = 0;
    if !questionnaire.eats_independently {
        raw += 5;
    }
    if !questionnaire.washes_independently {
        raw += 5;
    }
    raw += match questionnaire.mobility {
        Mobility::Bedridden => 5,
        Mobility::Assisted => 3,
        Mobility::Independent => 0,
    };
    raw
}

pub(crate) fn spiritual_raw(questionnaire: &PersonQuestionnaire) -> u32 {
    let cognitive = match questionnaire.cognitive_status {
        CognitiveStatus::Severe => 5,
        CognitiveStatus::Mild => 3,
        CognitiveStatus::Unimpaired => 0,
    };
    let loneliness = match questionnaire.loneliness {
        LonelinessLevel::High => 5,
        LonelinessLevel::Medium => 3,
        LonelinessLevel::Low => 0,
    };
    cognitive + loneliness + questionnaire.social_need_per_week.min(5)
}

/// Frequent visits and close family both raise the transport convenience a person needs.
pub(crate) fn traffic_raw(questionnaire: &PersonQuestionnaire, tiers: &DistanceTiers) -> u32 {
    let distance = if questionnaire.family_distance_km < tiers.near_km {
        5
    } else if questionnaire.family_distance_km < tiers.mid_km {
        3
    } else {
        1
    };
    let pickup = if questionnaire.needs_pickup { 2 } else { 0 };
    questionnaire.visits_per_week.min(5) + distance + pickup
}
