use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub api_base_url: String,
    /// Pre-provisioned bearer token. When set, OAuth is never attempted.
    pub api_auth_token: Option<String>,
    pub api_client_id: Option<String>,
    pub api_client_secret: Option<String>,
    pub api_token_scope: String,
    /// Explicit OAuth token endpoint; derived from `api_base_url` when absent.
    pub api_auth_url: Option<String>,
    pub api_timeout_secs: u64,
    pub api_user_agent: String,
    pub mock_enabled: bool,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("api_base_url", &self.api_base_url)
            .field(
                "api_auth_token",
                &self.api_auth_token.as_ref().map(|_| "[redacted]"),
            )
            .field("api_client_id", &self.api_client_id)
            .field(
                "api_client_secret",
                &self.api_client_secret.as_ref().map(|_| "[redacted]"),
            )
            .field("api_token_scope", &self.api_token_scope)
            .field("api_auth_url", &self.api_auth_url)
            .field("api_timeout_secs", &self.api_timeout_secs)
            .field("api_user_agent", &self.api_user_agent)
            .field("mock_enabled", &self.mock_enabled)
            .finish()
    }
}
