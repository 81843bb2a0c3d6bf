use crate::infra::{self, OutputFormat, ShortlistReport};
use care_match::config::AppConfig;
use care_match::error::AppError;
use care_match::matching::{
    CapabilityProfile, CognitiveStatus, FacilityIdentity, LonelinessLevel, MatchEngine, Mobility,
    PersonQuestionnaire, ServiceType, ServiceTypes,
};
use clap::Args;
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Service type to request instead of the sample person's long_term stay
    #[arg(long, value_parser = infra::parse_service_type)]
    pub(crate) service_type: Option<ServiceType>,
    /// Monthly budget to use instead of the sample person's 3500
    #[arg(long)]
    pub(crate) budget: Option<u32>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

pub(crate) fn run_demo(args: DemoArgs, config: AppConfig) -> Result<(), AppError> {
    let engine = MatchEngine::new(config.matching);
    let report = demo_report(&engine, &args);
    info!(
        catalog_size = report.catalog_size,
        shortlisted = report.results.len(),
        "demo shortlist ready"
    );
    infra::emit_report(&report, args.format)
}

fn demo_report(engine: &MatchEngine, args: &DemoArgs) -> ShortlistReport {
    let mut person = sample_person();
    if let Some(service_type) = &args.service_type {
        person.service_type = service_type.clone();
    }
    if let Some(budget) = args.budget {
        person.max_budget = budget;
    }

    let need = engine.build_need_vector(&person);
    let service_type = need.service_type.clone();
    ShortlistReport::build(engine, need, &sample_catalog(), service_type)
}

pub(crate) fn sample_person() -> PersonQuestionnaire {
    PersonQuestionnaire {
        chronic_disease_count: 1,
        needs_monitoring: true,
        needs_rehabilitation: false,
        needs_assistive_device: false,
        eats_independently: true,
        washes_independently: false,
        mobility: Mobility::Assisted,
        cognitive_status: CognitiveStatus::Mild,
        loneliness: LonelinessLevel::High,
        social_need_per_week: 3,
        family_distance_km: 8.0,
        visits_per_week: 3,
        needs_pickup: true,
        service_type: ServiceType::long_term(),
        max_budget: 3500,
    }
}

pub(crate) fn sample_catalog() -> Vec<CapabilityProfile> {
    vec![
        sample_facility(
            "Nursing Home A (Comprehensive)",
            "123 Health St",
            "555-0001",
            [5.0, 4.0, 3.0, 4.0],
            &[ServiceType::long_term(), ServiceType::day_care()],
            4000,
        ),
        sample_facility(
            "Nursing Home B (Spiritual Focus)",
            "456 Care Ln",
            "555-0002",
            [3.0, 3.0, 5.0, 2.0],
            &[ServiceType::long_term()],
            3000,
        ),
        sample_facility(
            "Nursing Home C (Community)",
            "789 Community Rd",
            "555-0003",
            [2.0, 2.0, 2.0, 5.0],
            &[ServiceType::day_care()],
            2000,
        ),
    ]
}

fn sample_facility(
    name: &str,
    address: &str,
    contact: &str,
    scores: [f64; 4],
    services: &[ServiceType],
    price: u32,
) -> CapabilityProfile {
    CapabilityProfile {
        identity: FacilityIdentity {
            name: name.to_string(),
            address: address.to_string(),
            contact: contact.to_string(),
            description: String::new(),
        },
        medical_score: scores[0],
        life_score: scores[1],
        spiritual_score: scores[2],
        traffic_score: scores[3],
        service_types: services.iter().cloned().collect::<ServiceTypes>(),
        price,
    }
}
