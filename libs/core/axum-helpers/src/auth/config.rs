//! API key configuration.
//!
//! Implements `FromEnv` from `core_config`, the same way `ServerConfig` does.

use axum::http::HeaderName;
use core_config::{ConfigError, Environment, FromEnv, env_or_default, env_required};

/// Header carrying the key when `API_KEY_HEADER` is unset.
pub const DEFAULT_HEADER: &str = "x-api-key";

/// Key accepted in development when `API_KEY` is unset.
pub const DEVELOPMENT_KEY: &str = "dev-secret-key";

/// Shared-secret configuration for mutating routes.
///
/// Loaded from environment variables:
/// - `API_KEY_HEADER` (optional, defaults to `x-api-key`)
/// - `API_KEY` (required in production, defaults to `dev-secret-key` otherwise)
///
/// # Example
///
/// ```ignore
/// use axum_helpers::ApiKeyConfig;
/// use core_config::{Environment, FromEnv};
///
/// let config = ApiKeyConfig::from_env_for(&Environment::from_env())?;
///
/// // Manual construction (for testing)
/// let config = ApiKeyConfig::new("test-key");
/// ```
#[derive(Clone, Debug)]
pub struct ApiKeyConfig {
    pub header: HeaderName,
    pub key: String,
}

impl ApiKeyConfig {
    /// Create a config expecting `key` in the default header.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            header: HeaderName::from_static(DEFAULT_HEADER),
            key: key.into(),
        }
    }

    pub fn with_header(mut self, header: HeaderName) -> Self {
        self.header = header;
        self
    }

    /// Load from the environment, applying the development fallback key
    /// only outside production.
    pub fn from_env_for(environment: &Environment) -> Result<Self, ConfigError> {
        let header_raw = env_or_default("API_KEY_HEADER", DEFAULT_HEADER);
        let header = HeaderName::try_from(header_raw.trim().to_ascii_lowercase()).map_err(|e| {
            ConfigError::ParseError {
                key: "API_KEY_HEADER".to_string(),
                details: e.to_string(),
            }
        })?;

        let key = if environment.is_production() {
            env_required("API_KEY")?
        } else {
            std::env::var("API_KEY").unwrap_or_else(|_| {
                tracing::warn!("API_KEY not set, using the development key");
                DEVELOPMENT_KEY.to_string()
            })
        };

        if key.trim().is_empty() {
            return Err(ConfigError::ParseError {
                key: "API_KEY".to_string(),
                details: "must not be empty".to_string(),
            });
        }

        Ok(Self { header, key })
    }
}

impl FromEnv for ApiKeyConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_for(&Environment::from_env())
    }
}
