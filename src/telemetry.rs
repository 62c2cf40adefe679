use tracing_subscriber::EnvFilter;

use crate::error::CliError;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "PPA_LOG";

const DEFAULT_LEVEL: &str = "warn";

/// `PPA_LOG` wins, then the configured level, then `warn`.
fn directive(env_value: Option<String>, configured: Option<&str>) -> String {
    env_value
        .filter(|v| !v.trim().is_empty())
        .or_else(|| configured.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_LEVEL.to_string())
}

/// Install the stderr subscriber. Stdout is left to reports.
pub fn init(configured: Option<&str>) -> Result<(), CliError> {
    let value = directive(std::env::var(LOG_ENV).ok(), configured);
    let filter = EnvFilter::try_new(&value).map_err(|source| CliError::LogFilter {
        value: value.clone(),
        source,
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(CliError::Telemetry)
}

#[cfg(test)]
#[path = "telemetry_test.rs"]
mod tests;
