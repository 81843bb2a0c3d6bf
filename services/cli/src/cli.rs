use crate::demo::{run_demo, DemoArgs};
use crate::infra::{self, OutputFormat, ShortlistReport};
use care_match::config::{AppConfig, ConfigError};
use care_match::error::AppError;
use care_match::matching::{FacilityQuestionnaire, MatchEngine, PersonQuestionnaire};
use care_match::telemetry;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "care-match",
    about = "Match a person's care needs against a catalog of care facilities",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank a facility catalog against a person questionnaire
    Match(MatchArgs),
    /// Print the need vector derived from a person questionnaire
    BuildNeed(QuestionnaireArgs),
    /// Print the capability profile derived from a facility questionnaire
    BuildProfile(QuestionnaireArgs),
    /// Rank the built-in sample catalog (default command)
    Demo(DemoArgs),
}

#[derive(Args, Debug)]
pub(crate) struct MatchArgs {
    /// Person questionnaire (JSON)
    #[arg(long)]
    pub(crate) questionnaire: PathBuf,
    /// Facility catalog (.csv or .json)
    #[arg(long)]
    pub(crate) catalog: PathBuf,
    /// Treat the catalog as a JSON array of facility questionnaires
    #[arg(long)]
    pub(crate) facility_questionnaires: bool,
    /// Override the configured shortlist length
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub(crate) top_k: Option<u16>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug)]
pub(crate) struct QuestionnaireArgs {
    /// Questionnaire file (JSON)
    #[arg(long)]
    pub(crate) questionnaire: PathBuf,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(
        environment = ?config.environment,
        top_k = config.matching.top_k,
        "configuration loaded"
    );

    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Match(args) => run_match(args, config),
        Command::BuildNeed(args) => {
            let questionnaire: PersonQuestionnaire = infra::read_json(&args.questionnaire)?;
            let engine = MatchEngine::new(config.matching);
            infra::emit(&engine.build_need_vector(&questionnaire))
        }
        Command::BuildProfile(args) => {
            let questionnaire: FacilityQuestionnaire = infra::read_json(&args.questionnaire)?;
            let engine = MatchEngine::new(config.matching);
            infra::emit(&engine.build_capability_profile(&questionnaire))
        }
        Command::Demo(args) => run_demo(args, config),
    }
}

fn run_match(args: MatchArgs, config: AppConfig) -> Result<(), AppError> {
    let MatchArgs {
        questionnaire,
        catalog,
        facility_questionnaires,
        top_k,
        format,
    } = args;

    let mut matching = config.matching;
    if let Some(top_k) = top_k {
        matching.top_k = usize::from(top_k);
    }
    let engine = MatchEngine::try_new(matching).map_err(ConfigError::from)?;

    let person: PersonQuestionnaire = infra::read_json(&questionnaire)?;
    let need = engine.build_need_vector(&person);
    let catalog = infra::load_catalog(&catalog, &engine, facility_questionnaires)?;

    let service_type = need.service_type.clone();
    let report = ShortlistReport::build(&engine, need, &catalog, service_type);
    infra::emit_report(&report, format)
}
