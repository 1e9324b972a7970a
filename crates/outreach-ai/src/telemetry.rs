use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Directives appended to the configured level so HTTP internals stay quiet
/// when the scoring pipeline runs at debug.
const QUIET_DEPENDENCIES: &str = "hyper=warn,h2=warn,tower=warn";

#[derive(Debug)]
pub enum TelemetryError {
    InvalidFilter {
        directive: String,
        source: ParseError,
    },
    AlreadyInitialized(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::InvalidFilter { directive, .. } => {
                write!(f, "log filter '{directive}' is not a valid tracing directive")
            }
            TelemetryError::AlreadyInitialized(err) => {
                write!(f, "tracing subscriber already installed: {err}")
            }
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::InvalidFilter { source, .. } => Some(source),
            TelemetryError::AlreadyInitialized(err) => Some(&**err),
        }
    }
}

/// Installs the global subscriber for the recommendation service. `RUST_LOG`
/// wins when set; otherwise the configured level applies to this crate and
/// the HTTP stack is capped at warn.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => build_filter(&config.log_level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .compact()
        .try_init()
        .map_err(TelemetryError::AlreadyInitialized)
}

fn build_filter(log_level: &str) -> Result<EnvFilter, TelemetryError> {
    let directive = format!("{log_level},{QUIET_DEPENDENCIES}");
    EnvFilter::try_new(&directive)
        .map_err(|source| TelemetryError::InvalidFilter { directive, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_level_combines_with_quieting_directives() {
        let filter = build_filter("debug").expect("plain level builds");
        let rendered = filter.to_string();
        assert!(rendered.contains("debug"));
        assert!(rendered.contains("hyper=warn"));
    }

    #[test]
    fn malformed_level_reports_the_full_directive() {
        let error = build_filter("foo=bar=baz").expect_err("bad directive rejected");
        let TelemetryError::InvalidFilter { directive, .. } = &error else {
            panic!("expected an invalid-filter error");
        };
        assert!(directive.starts_with("foo=bar=baz,"));
        assert!(error.to_string().contains("not a valid tracing directive"));
    }
}
