//! Loader configuration, usually read from a `[http]` / `[object_storage]` / `[local]` TOML file.

use std::time::Duration;

use serde::Deserialize;

use crate::domain::AppError;

/// Environment variable that redirects object-storage traffic to an emulator.
pub const STORAGE_EMULATOR_HOST: &str = "STORAGE_EMULATOR_HOST";

/// Tunables for every fetch backend.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoaderConfig {
    /// HTTP(S) transport settings.
    #[serde(default)]
    pub http: HttpConfig,
    /// Object-storage client settings.
    #[serde(default)]
    pub object_storage: ObjectStorageConfig,
    /// Local filesystem settings.
    #[serde(default)]
    pub local: LocalConfig,
}

impl LoaderConfig {
    /// Parse configuration from TOML content.
    pub fn parse_toml(content: &str) -> Result<Self, AppError> {
        let config: LoaderConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.http.connect_timeout_secs == 0 {
            return Err(AppError::config_error("http.connect_timeout_secs must be greater than zero"));
        }
        if self.object_storage.endpoint.trim().is_empty() {
            return Err(AppError::config_error("object_storage.endpoint must not be empty"));
        }
        Ok(())
    }
}

/// HTTP(S) transport configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Dial timeout; also bounds the TLS handshake.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// TCP keep-alive interval.
    #[serde(default = "default_keepalive")]
    pub tcp_keepalive_secs: u64,
    /// Upper bound on idle pooled connections per host.
    #[serde(default = "default_pool_max_idle")]
    pub pool_max_idle_per_host: usize,
    /// How long an idle pooled connection is kept.
    #[serde(default = "default_pool_idle_timeout")]
    pub pool_idle_timeout_secs: u64,
    /// Whole-request timeout. Zero disables it.
    #[serde(default)]
    pub request_timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl HttpConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn tcp_keepalive(&self) -> Duration {
        Duration::from_secs(self.tcp_keepalive_secs)
    }

    pub fn pool_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.pool_idle_timeout_secs)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: default_connect_timeout(),
            tcp_keepalive_secs: default_keepalive(),
            pool_max_idle_per_host: default_pool_max_idle(),
            pool_idle_timeout_secs: default_pool_idle_timeout(),
            request_timeout_secs: 0,
            user_agent: default_user_agent(),
        }
    }
}

fn default_connect_timeout() -> u64 {
    30
}

fn default_keepalive() -> u64 {
    30
}

fn default_pool_max_idle() -> usize {
    100
}

fn default_pool_idle_timeout() -> u64 {
    90
}

fn default_user_agent() -> String {
    format!("conflate/{}", env!("CARGO_PKG_VERSION"))
}

/// Object-storage (GCS JSON API) configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectStorageConfig {
    /// API endpoint; `STORAGE_EMULATOR_HOST` takes precedence when set.
    #[serde(default = "default_storage_endpoint")]
    pub endpoint: String,
    /// Name of the environment variable holding an OAuth2 bearer token.
    #[serde(default = "default_access_token_env")]
    pub access_token_env: String,
}

impl ObjectStorageConfig {
    /// Endpoint after applying the emulator override.
    pub fn effective_endpoint(&self) -> String {
        match std::env::var(STORAGE_EMULATOR_HOST) {
            Ok(host) if !host.trim().is_empty() => normalize_emulator_host(host.trim()),
            _ => self.endpoint.trim_end_matches('/').to_string(),
        }
    }

    /// Bearer token read from `access_token_env`, if any.
    pub fn access_token(&self) -> Option<String> {
        std::env::var(&self.access_token_env).ok().filter(|token| !token.trim().is_empty())
    }
}

impl Default for ObjectStorageConfig {
    fn default() -> Self {
        Self { endpoint: default_storage_endpoint(), access_token_env: default_access_token_env() }
    }
}

fn normalize_emulator_host(host: &str) -> String {
    let host = host.trim_end_matches('/');
    if host.contains("://") { host.to_string() } else { format!("http://{}", host) }
}

fn default_storage_endpoint() -> String {
    "https://storage.googleapis.com".to_string()
}

fn default_access_token_env() -> String {
    "GOOGLE_OAUTH_ACCESS_TOKEN".to_string()
}

/// Local filesystem configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocalConfig {
    /// Retry a failed local read through the HTTP transport's `file://` handler
    /// instead of reporting the I/O error.
    #[serde(default)]
    pub fallback_to_http: bool,
}
