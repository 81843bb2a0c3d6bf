use std::io::{self, Write};
use std::path::Path;

use care_match::error::AppError;
use care_match::matching::{
    CapabilityProfile, CatalogImporter, MatchEngine, MatchResult, NeedVector, ServiceType,
};
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Ranked shortlist for one person, as printed by the CLI.
#[derive(Debug, Serialize)]
pub(crate) struct ShortlistReport {
    pub(crate) evaluated_at: DateTime<Utc>,
    pub(crate) service_type: ServiceType,
    pub(crate) need: NeedVector,
    pub(crate) catalog_size: usize,
    pub(crate) results: Vec<MatchResult>,
}

impl ShortlistReport {
    pub(crate) fn build(
        engine: &MatchEngine,
        need: NeedVector,
        catalog: &[CapabilityProfile],
        service_type: ServiceType,
    ) -> Self {
        let results = engine.match_and_rank(&need, catalog, &service_type);
        Self {
            evaluated_at: Utc::now(),
            service_type,
            need,
            catalog_size: catalog.len(),
            results,
        }
    }
}

pub(crate) fn parse_service_type(raw: &str) -> Result<ServiceType, String> {
    ServiceType::new(raw).map_err(|err| err.to_string())
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let value = serde_json::from_str(&raw)?;
    info!(path = %path.display(), "questionnaire loaded");
    Ok(value)
}

pub(crate) fn load_catalog(
    path: &Path,
    engine: &MatchEngine,
    from_questionnaires: bool,
) -> Result<Vec<CapabilityProfile>, AppError> {
    let catalog = if from_questionnaires {
        CatalogImporter::questionnaires_from_path(path, engine)?
    } else {
        CatalogImporter::from_path(path, &engine.config().scale)?
    };
    Ok(catalog)
}

pub(crate) fn emit<T: Serialize>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

pub(crate) fn emit_report(report: &ShortlistReport, format: OutputFormat) -> Result<(), AppError> {
    match format {
        OutputFormat::Json => emit(report),
        OutputFormat::Text => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            render_text(&mut out, report)?;
            Ok(())
        }
    }
}

pub(crate) fn render_text<W: Write>(out: &mut W, report: &ShortlistReport) -> io::Result<()> {
    let need = &report.need;

    writeln!(out, "Care facility shortlist")?;
    writeln!(
        out,
        "Requested service: {} (budget {})",
        report.service_type, need.budget
    )?;
    writeln!(
        out,
        "Need vector: medical {:.2}, life {:.2}, spiritual {:.2}, traffic {:.2}",
        need.medical, need.life, need.spiritual, need.traffic
    )?;
    writeln!(
        out,
        "Catalog: {} facilities, evaluated {}",
        report.catalog_size,
        report.evaluated_at.format("%Y-%m-%d %H:%M UTC")
    )?;

    if report.results.is_empty() {
        writeln!(out, "\nNo facility offers {}", report.service_type)?;
        return Ok(());
    }

    for (position, result) in report.results.iter().enumerate() {
        writeln!(
            out,
            "\n{}. {} ({:.1})",
            position + 1,
            result.profile.name(),
            result.total_match_score
        )?;
        writeln!(out, "   {}", result.summary)?;
        for detail in &result.dimension_details {
            writeln!(
                out,
                "   - {}: {} ({})",
                detail.dimension.label(),
                detail.status.label(),
                detail.comment
            )?;
        }
    }

    Ok(())
}
