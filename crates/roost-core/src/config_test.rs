use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

fn empty_env<'a>() -> HashMap<&'a str, &'a str> {
    HashMap::new()
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "ROOST_ENV"));
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map = empty_env();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should load");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:8080");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.api_base_url, "http://localhost:3000/api/v1");
    assert!(cfg.api_auth_token.is_none());
    assert!(cfg.api_client_id.is_none());
    assert!(cfg.api_client_secret.is_none());
    assert_eq!(cfg.api_token_scope, "assets.read");
    assert!(cfg.api_auth_url.is_none());
    assert_eq!(cfg.api_timeout_secs, 10);
    assert_eq!(cfg.api_user_agent, "roost/0.1 (listing-search)");
    assert!(!cfg.mock_enabled);
}

#[test]
fn build_app_config_reads_oauth_settings() {
    let mut map = empty_env();
    map.insert("ROOST_API_BASE_URL", "https://api.example.com/api/v1");
    map.insert("ROOST_API_CLIENT_ID", "client-1");
    map.insert("ROOST_API_CLIENT_SECRET", "s3cret");
    map.insert("ROOST_API_TOKEN_SCOPE", "assets.read leads.write");
    map.insert("ROOST_API_AUTH_URL", "https://auth.example.com/oauth/token");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.api_base_url, "https://api.example.com/api/v1");
    assert_eq!(cfg.api_client_id.as_deref(), Some("client-1"));
    assert_eq!(cfg.api_client_secret.as_deref(), Some("s3cret"));
    assert_eq!(cfg.api_token_scope, "assets.read leads.write");
    assert_eq!(
        cfg.api_auth_url.as_deref(),
        Some("https://auth.example.com/oauth/token")
    );
}

#[test]
fn blank_values_are_treated_as_unset() {
    let mut map = empty_env();
    map.insert("ROOST_API_AUTH_TOKEN", "   ");
    map.insert("ROOST_API_TOKEN_SCOPE", "");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.api_auth_token.is_none());
    assert_eq!(cfg.api_token_scope, "assets.read");
}

#[test]
fn mock_flag_accepts_common_spellings() {
    for (raw, expected) in [
        ("true", true),
        ("1", true),
        ("YES", true),
        ("false", false),
        ("0", false),
        ("no", false),
    ] {
        let mut map = empty_env();
        map.insert("ROOST_MOCK_ENABLED", raw);
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.mock_enabled, expected, "ROOST_MOCK_ENABLED={raw}");
    }
}

#[test]
fn mock_flag_rejects_garbage() {
    let mut map = empty_env();
    map.insert("ROOST_MOCK_ENABLED", "maybe");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ROOST_MOCK_ENABLED"),
        "expected InvalidEnvVar(ROOST_MOCK_ENABLED), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = empty_env();
    map.insert("ROOST_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ROOST_BIND_ADDR"),
        "expected InvalidEnvVar(ROOST_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn api_timeout_override_and_validation() {
    let mut map = empty_env();
    map.insert("ROOST_API_TIMEOUT_SECS", "25");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.api_timeout_secs, 25);

    map.insert("ROOST_API_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ROOST_API_TIMEOUT_SECS"),
        "expected InvalidEnvVar(ROOST_API_TIMEOUT_SECS), got: {result:?}"
    );

    map.insert("ROOST_API_TIMEOUT_SECS", "ten");
    assert!(build_app_config(lookup_from_map(&map)).is_err());
}

#[test]
fn production_requires_base_url_unless_mocked() {
    let mut map = empty_env();
    map.insert("ROOST_ENV", "production");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "ROOST_API_BASE_URL"),
        "expected MissingEnvVar(ROOST_API_BASE_URL), got: {result:?}"
    );

    map.insert("ROOST_MOCK_ENABLED", "true");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert!(cfg.mock_enabled);
}

#[test]
fn debug_output_redacts_secrets() {
    let mut map = empty_env();
    map.insert("ROOST_API_AUTH_TOKEN", "static-token-value");
    map.insert("ROOST_API_CLIENT_SECRET", "client-secret-value");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("static-token-value"));
    assert!(!rendered.contains("client-secret-value"));
    assert!(rendered.contains("[redacted]"));
}
