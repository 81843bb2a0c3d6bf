use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Environment variable whose directive wins over the configured log level.
pub const RUST_LOG: &str = "RUST_LOG";

/// Where the active filter directive was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveOrigin {
    RustLog,
    AppLogLevel,
}

impl DirectiveOrigin {
    pub fn variable(self) -> &'static str {
        match self {
            DirectiveOrigin::RustLog => RUST_LOG,
            DirectiveOrigin::AppLogLevel => "APP_LOG_LEVEL",
        }
    }
}

#[derive(Debug)]
pub enum TelemetryError {
    InvalidDirective {
        directive: String,
        origin: DirectiveOrigin,
        source: ParseError,
    },
    AlreadyInstalled(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::InvalidDirective {
                directive, origin, ..
            } => write!(
                f,
                "{} holds an invalid log filter '{directive}'",
                origin.variable()
            ),
            TelemetryError::AlreadyInstalled(err) => {
                write!(f, "a global log subscriber is already installed: {err}")
            }
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::InvalidDirective { source, .. } => Some(source),
            TelemetryError::AlreadyInstalled(err) => Some(&**err),
        }
    }
}

/// Picks the filter directive: a non-blank `RUST_LOG` first, then the configured level.
pub fn resolve_directive(
    config: &TelemetryConfig,
    rust_log: Option<String>,
) -> (String, DirectiveOrigin) {
    match rust_log {
        Some(directive) if !directive.trim().is_empty() => {
            (directive.trim().to_string(), DirectiveOrigin::RustLog)
        }
        _ => (config.log_level.trim().to_string(), DirectiveOrigin::AppLogLevel),
    }
}

pub fn build_filter(
    directive: &str,
    origin: DirectiveOrigin,
) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(directive).map_err(|source| TelemetryError::InvalidDirective {
        directive: directive.to_string(),
        origin,
        source,
    })
}

/// Installs the global subscriber. Events go to stderr so shortlists printed on stdout
/// stay machine readable. A malformed `RUST_LOG` is reported rather than skipped.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let (directive, origin) = resolve_directive(config, std::env::var(RUST_LOG).ok());
    let env_filter = build_filter(&directive, origin)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::AlreadyInstalled)?;

    tracing::debug!(directive = %directive, origin = origin.variable(), "log filter installed");
    Ok(())
}
