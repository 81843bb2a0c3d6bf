use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::matching::{MatchingConfig, MatchingConfigError};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub matching: MatchingConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let mut matching = match env::var("CARE_MATCH_WEIGHTS") {
            Ok(path) if !path.trim().is_empty() => load_matching_config(PathBuf::from(path))?,
            _ => MatchingConfig::default(),
        };

        if let Ok(raw) = env::var("CARE_MATCH_TOP_K") {
            matching.top_k = raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidTopK { value: raw.clone() })?;
        }

        matching.validate()?;

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            matching,
        })
    }
}

fn load_matching_config(path: PathBuf) -> Result<MatchingConfig, ConfigError> {
    let raw = match std::fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(source) => return Err(ConfigError::ReadMatching { path, source }),
    };
    serde_json::from_str(&raw).map_err(|source| ConfigError::ParseMatching { path, source })
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidTopK {
        value: String,
    },
    ReadMatching {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseMatching {
        path: PathBuf,
        source: serde_json::Error,
    },
    InvalidMatching(MatchingConfigError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTopK { value } => {
                write!(f, "CARE_MATCH_TOP_K must be a positive integer, got '{value}'")
            }
            ConfigError::ReadMatching { path, .. } => {
                write!(f, "unable to read matching config {}", path.display())
            }
            ConfigError::ParseMatching { path, .. } => {
                write!(f, "matching config {} is not valid JSON", path.display())
            }
            ConfigError::InvalidMatching(err) => write!(f, "invalid matching config: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidTopK { .. } => None,
            ConfigError::ReadMatching { source, .. } => Some(source),
            ConfigError::ParseMatching { source, .. } => Some(source),
            ConfigError::InvalidMatching(err) => Some(err),
        }
    }
}

impl From<MatchingConfigError> for ConfigError {
    fn from(value: MatchingConfigError) -> Self {
        Self::InvalidMatching(value)
    }
}
