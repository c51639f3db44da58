//! Products Domain
//!
//! In-memory product catalogue with validation, querying and an Axum router.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, API key guard on mutations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, listing rules
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐     ┌─────────────┐
//! │ Repository  │     │    Query    │  ← filter, search, pagination, stats
//! └──────┬──────┘     └─────────────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use axum_helpers::{ApiKeyAuth, ApiKeyConfig};
//! use domain_products::{handlers, InMemoryProductRepository, ProductService};
//!
//! let repository = InMemoryProductRepository::new();
//! let service = ProductService::new(repository);
//! let auth = ApiKeyAuth::new(&ApiKeyConfig::new("secret"));
//!
//! let router = handlers::router(service, auth);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod query;
pub mod repository;
pub mod service;
pub mod validation;

pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{sample_products, Product, ProductInput, ProductPatch};
pub use query::{CategoryStats, ListQuery, Page, Pagination, SearchQuery};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::{ProductListing, ProductService};
pub use validation::{validate_product, ValidationMode, ValidationReport};
