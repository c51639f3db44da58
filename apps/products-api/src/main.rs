//! Products API - REST server over an in-memory catalogue

use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_products::ProductRepository;
use std::time::Duration;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);
    axum_helpers::set_expose_diagnostics(config.environment.expose_diagnostics());

    let state = AppState::new(config);
    let products = state.repository.count().await?;
    info!(
        products,
        seeded = state.config.seed_sample_data,
        api_key_header = %state.config.api_key.header,
        "Product repository ready"
    );

    let api_routes = api::routes(&state);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(
        api_routes,
        &state.config.server,
        Some(state.config.api_key.header.clone()),
    )?;
    let app = router.merge(health_router(state.config.app));

    info!("Starting Products API on port {}", state.config.server.port);

    let repository = state.repository.clone();
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            match repository.count().await {
                Ok(discarded) => info!(discarded, "In-memory products are not persisted"),
                Err(e) => warn!("Could not count products at shutdown: {}", e),
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
