use crate::app_config::AppConfig;
use crate::designations::DEFAULT_EXCLUDED_DESIGNATIONS;
use crate::ConfigError;

const DEFAULT_NPS_API_BASE_URL: &str = "https://developer.nps.gov/api/v1";

/// Load application configuration from environment variables already in the process.
///
/// Does NOT load `.env` files; the binary does that once at startup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a
/// plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let nps_api_key = require("NPS_API_KEY")?;
    let nps_api_base_url = or_default("NPS_API_BASE_URL", DEFAULT_NPS_API_BASE_URL);
    let log_level = or_default("PARKMAP_LOG_LEVEL", "info");

    let page_size = parse_u32("PARKMAP_PAGE_SIZE", "100")?;
    if page_size == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "PARKMAP_PAGE_SIZE".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let max_photos_per_site = parse_usize("PARKMAP_MAX_PHOTOS", "2")?;
    let excluded_designations = lookup("PARKMAP_EXCLUDED_DESIGNATIONS")
        .map_or_else(
            |_| {
                DEFAULT_EXCLUDED_DESIGNATIONS
                    .iter()
                    .map(|d| (*d).to_string())
                    .collect()
            },
            |raw| parse_designations(&raw),
        );

    let request_timeout_secs = parse_u64("PARKMAP_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "PARKMAP_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let user_agent = or_default("PARKMAP_USER_AGENT", "parkmap/0.1 (site-data)");
    let max_retries = parse_u32("PARKMAP_MAX_RETRIES", "2")?;
    let retry_backoff_base_ms = parse_u64("PARKMAP_RETRY_BACKOFF_BASE_MS", "500")?;

    Ok(AppConfig {
        nps_api_key,
        nps_api_base_url,
        log_level,
        page_size,
        max_photos_per_site,
        excluded_designations,
        request_timeout_secs,
        user_agent,
        max_retries,
        retry_backoff_base_ms,
    })
}

/// Splits a comma-separated override list. Entries are trimmed and empty
/// entries dropped, since a stray empty string would match every name.
fn parse_designations(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
