//! Products API routes

use axum::Router;
use axum_helpers::ApiKeyAuth;
use domain_products::{handlers, ProductService};

use crate::state::AppState;

/// Create products router
pub fn router(state: &AppState) -> Router {
    let service = ProductService::new(state.repository.clone());
    handlers::router(service, ApiKeyAuth::new(&state.config.api_key))
}
