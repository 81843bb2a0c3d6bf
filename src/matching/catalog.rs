//! Loading facility catalogs supplied by an external store.
//!
//! Profiles arriving here bypass the capability builder, so every entry is checked
//! against the score scale before it can reach the engine.

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};
use tracing::info;

use super::config::ScoreScale;
use super::domain::{
    CapabilityProfile, FacilityIdentity, FacilityQuestionnaire, ParseFieldError, ServiceTypes,
};
use super::MatchEngine;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid catalog JSON data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalog entry {row} ({name}): {reason}")]
    InvalidEntry {
        row: usize,
        name: String,
        reason: String,
    },
    #[error("unsupported catalog format for {}: expected .csv or .json", .0.display())]
    UnsupportedFormat(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Csv,
    Json,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

pub struct CatalogImporter;

impl CatalogImporter {
    /// Loads ready-made profiles, choosing the format from the file extension.
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        scale: &ScoreScale,
    ) -> Result<Vec<CapabilityProfile>, CatalogError> {
        let path = path.as_ref();
        let format = CatalogFormat::from_path(path)
            .ok_or_else(|| CatalogError::UnsupportedFormat(path.to_path_buf()))?;
        let file = std::fs::File::open(path)?;
        let profiles = match format {
            CatalogFormat::Csv => Self::from_csv_reader(file, scale)?,
            CatalogFormat::Json => Self::from_json_reader(file, scale)?,
        };
        info!(path = %path.display(), facilities = profiles.len(), "catalog loaded");
        Ok(profiles)
    }

    pub fn from_csv_reader<R: Read>(
        reader: R,
        scale: &ScoreScale,
    ) -> Result<Vec<CapabilityProfile>, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut profiles = Vec::new();

        for (index, record) in csv_reader.deserialize::<CatalogRow>().enumerate() {
            let row = index + 1;
            let profile = record?.into_profile(row)?;
            validate_profile(&profile, row, scale)?;
            profiles.push(profile);
        }

        Ok(profiles)
    }

    pub fn from_json_reader<R: Read>(
        reader: R,
        scale: &ScoreScale,
    ) -> Result<Vec<CapabilityProfile>, CatalogError> {
        let profiles: Vec<CapabilityProfile> = serde_json::from_reader(reader)?;
        for (index, profile) in profiles.iter().enumerate() {
            validate_profile(profile, index + 1, scale)?;
        }
        Ok(profiles)
    }

    /// Builds a catalog from a JSON array of facility questionnaires.
    pub fn from_questionnaires<R: Read>(
        reader: R,
        engine: &MatchEngine,
    ) -> Result<Vec<CapabilityProfile>, CatalogError> {
        let questionnaires: Vec<FacilityQuestionnaire> = serde_json::from_reader(reader)?;
        let scale = &engine.config().scale;
        let mut profiles = Vec::with_capacity(questionnaires.len());
        for (index, questionnaire) in questionnaires.iter().enumerate() {
            let profile = engine.build_capability_profile(questionnaire);
            validate_profile(&profile, index + 1, scale)?;
            profiles.push(profile);
        }
        Ok(profiles)
    }

    pub fn questionnaires_from_path<P: AsRef<Path>>(
        path: P,
        engine: &MatchEngine,
    ) -> Result<Vec<CapabilityProfile>, CatalogError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let profiles = Self::from_questionnaires(file, engine)?;
        info!(
            path = %path.display(),
            facilities = profiles.len(),
            "catalog built from facility questionnaires"
        );
        Ok(profiles)
    }
}

/// Checks a profile against the scale invariants. `row` is 1-based.
pub fn validate_profile(
    profile: &CapabilityProfile,
    row: usize,
    scale: &ScoreScale,
) -> Result<(), CatalogError> {
    let invalid = |reason: String| CatalogError::InvalidEntry {
        row,
        name: profile.identity.name.clone(),
        reason,
    };

    for (field, value) in [
        ("medical_score", profile.medical_score),
        ("life_score", profile.life_score),
        ("spiritual_score", profile.spiritual_score),
        ("traffic_score", profile.traffic_score),
    ] {
        if !(scale.min..=scale.max).contains(&value) {
            return Err(invalid(format!(
                "{field} {value} outside [{}, {}]",
                scale.min, scale.max
            )));
        }
    }

    if profile.price == 0 {
        return Err(invalid("price must be positive".to_string()));
    }

    if profile.service_types.is_empty() {
        return Err(invalid("no service types offered".to_string()));
    }

    Ok(())
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    name: String,
    address: String,
    contact: String,
    medical_score: f64,
    life_score: f64,
    spiritual_score: f64,
    traffic_score: f64,
    service_types: String,
    price: u32,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    description: Option<String>,
}

impl CatalogRow {
    fn into_profile(self, row: usize) -> Result<CapabilityProfile, CatalogError> {
        let service_types = ServiceTypes::parse_list(&self.service_types).map_err(
            |err: ParseFieldError| CatalogError::InvalidEntry {
                row,
                name: self.name.clone(),
                reason: err.to_string(),
            },
        )?;

        Ok(CapabilityProfile {
            identity: FacilityIdentity {
                name: self.name,
                address: self.address,
                contact: self.contact,
                description: self.description.unwrap_or_default(),
            },
            medical_score: self.medical_score,
            life_score: self.life_score,
            spiritual_score: self.spiritual_score,
            traffic_score: self.traffic_score,
            service_types,
            price: self.price,
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
