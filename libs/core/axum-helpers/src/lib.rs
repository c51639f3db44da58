//! # Axum Helpers
//!
//! Utilities, middleware, and helpers for building Axum web applications.
//!
//! ## Modules
//!
//! - **[`auth`]**: Shared-secret API key checks for mutating routes
//! - **[`server`]**: Server setup, health check, graceful shutdown
//! - **[`http`]**: HTTP middleware (CORS, security headers)
//! - **[`errors`]**: Structured error responses with error codes
//! - **[`extractors`]**: JSON extractor with standard rejections
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::default();
//!     let router = create_router::<ApiDoc>(Router::new(), &config, None)?;
//!     create_production_app(router, &config, Duration::from_secs(30), async {}).await?;
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use auth::{ApiKeyAuth, ApiKeyConfig, require_api_key};

pub use server::{
    HealthResponse, OPENAPI_JSON_PATH, ShutdownCoordinator, create_production_app, create_router,
    health_router,
};

pub use http::{create_cors_layer, create_permissive_cors_layer, security_headers};

pub use errors::{
    AppError, ErrorCode, ErrorResponse, diagnostics_exposed, set_expose_diagnostics,
};

pub use extractors::JsonPayload;
