//! Application state management

use domain_products::{sample_products, InMemoryProductRepository};

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub repository: InMemoryProductRepository,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let repository = if config.seed_sample_data {
            InMemoryProductRepository::with_products(sample_products())
        } else {
            InMemoryProductRepository::new()
        };

        Self { config, repository }
    }
}
