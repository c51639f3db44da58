//! Configuration for Products API

use axum_helpers::ApiKeyConfig;
use core_config::{app_info, env_flag, server::ServerConfig, AppInfo, FromEnv};

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub api_key: ApiKeyConfig,
    /// Start with the three sample products
    pub seed_sample_data: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let api_key = ApiKeyConfig::from_env_for(&environment)?;
        let seed_sample_data = env_flag("SEED_SAMPLE_DATA", true)?;

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            api_key,
            seed_sample_data,
        })
    }
}
