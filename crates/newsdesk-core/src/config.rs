use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_NEWSAPI_BASE_URL: &str = "https://newsapi.org/v2/";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can feed a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let news_api_key = require("NEWS_API_KEY")?;
    if news_api_key.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "NEWS_API_KEY".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let newsapi_base_url = or_default("NEWSDESK_NEWSAPI_BASE_URL", DEFAULT_NEWSAPI_BASE_URL);
    let request_timeout_secs = parse_u64("NEWSDESK_REQUEST_TIMEOUT_SECS", "30")?;
    let data_dir = PathBuf::from(or_default("NEWSDESK_DATA_DIR", "../data"));
    let log_level = or_default("NEWSDESK_LOG_LEVEL", "info");
    let vader_lexicon_path = lookup("NEWSDESK_VADER_LEXICON")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    Ok(AppConfig {
        news_api_key,
        newsapi_base_url,
        request_timeout_secs,
        data_dir,
        log_level,
        vader_lexicon_path,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
