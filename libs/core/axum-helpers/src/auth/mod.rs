//! API key authentication for mutating routes.
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::auth::{ApiKeyAuth, ApiKeyConfig, require_api_key};
//! use core_config::FromEnv;
//!
//! let auth = ApiKeyAuth::new(&ApiKeyConfig::from_env()?);
//!
//! let routes = Router::new().route(
//!     "/items",
//!     get(list).merge(
//!         post(create).route_layer(axum::middleware::from_fn_with_state(auth, require_api_key)),
//!     ),
//! );
//! ```

pub mod config;
pub mod middleware;

pub use config::ApiKeyConfig;
pub use middleware::{ApiKeyAuth, require_api_key};
