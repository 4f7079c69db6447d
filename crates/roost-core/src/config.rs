use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

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
/// Decoupled from the real environment so it can be tested with a `HashMap`
/// lookup.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid, or if production
/// runs without mock mode and without `ROOST_API_BASE_URL`.
pub fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    // Blank values count as unset so `FOO=` in a .env file behaves like no FOO.
    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let or_default =
        |var: &str, default: &str| -> String { optional(var).unwrap_or_else(|| default.to_string()) };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
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

    let env = parse_environment(&or_default("ROOST_ENV", "development"))?;
    let bind_addr = parse_addr("ROOST_BIND_ADDR", "0.0.0.0:8080")?;
    let log_level = or_default("ROOST_LOG_LEVEL", "info");

    let mock_enabled = match optional("ROOST_MOCK_ENABLED") {
        Some(raw) => parse_flag(&raw).ok_or_else(|| ConfigError::InvalidEnvVar {
            var: "ROOST_MOCK_ENABLED".to_string(),
            reason: format!("expected true/false/1/0/yes/no, got \"{raw}\""),
        })?,
        None => false,
    };

    // A production deployment talking to the real API must say where it is.
    let api_base_url = match optional("ROOST_API_BASE_URL") {
        Some(url) => url,
        None if env == Environment::Production && !mock_enabled => {
            return Err(ConfigError::MissingEnvVar("ROOST_API_BASE_URL".to_string()));
        }
        None => "http://localhost:3000/api/v1".to_string(),
    };

    let api_timeout_secs = parse_u64("ROOST_API_TIMEOUT_SECS", "10")?;
    if api_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "ROOST_API_TIMEOUT_SECS".to_string(),
            reason: "timeout must be at least 1 second".to_string(),
        });
    }

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        api_base_url,
        api_auth_token: optional("ROOST_API_AUTH_TOKEN"),
        api_client_id: optional("ROOST_API_CLIENT_ID"),
        api_client_secret: optional("ROOST_API_CLIENT_SECRET"),
        api_token_scope: or_default("ROOST_API_TOKEN_SCOPE", "assets.read"),
        api_auth_url: optional("ROOST_API_AUTH_URL"),
        api_timeout_secs,
        api_user_agent: or_default("ROOST_API_USER_AGENT", "roost/0.1 (listing-search)"),
        mock_enabled,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] for anything other than
/// `development`, `test` or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "ROOST_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
