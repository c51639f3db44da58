//! Product Service - Business logic layer

use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;
use utoipa::ToSchema;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductInput, ProductPatch};
use crate::query::{
    category_stats, filter_by_category, search_by_name, CategoryStats, ListQuery, Page,
    Pagination,
};
use crate::repository::ProductRepository;

/// Body of `GET /api/products`: the bare list, or the paginated envelope
/// when any of `category`, `page`, `limit` was given.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum ProductListing {
    Plain(Vec<Product>),
    Paged(Page<Product>),
}

/// Product service providing business logic operations
///
/// Payloads arrive as raw JSON and are validated here before the repository
/// is touched, so a bad body is reported before an unknown ID.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List products, filtered and paginated when requested
    #[instrument(skip(self))]
    pub async fn list_products(&self, query: ListQuery) -> ProductResult<ProductListing> {
        let products = self.repository.list().await?;

        if !query.wants_envelope() {
            return Ok(ProductListing::Plain(products));
        }

        let filtered = filter_by_category(products, query.category.as_deref());
        let pagination = Pagination::from_raw(query.page.as_deref(), query.limit.as_deref());
        Ok(ProductListing::Paged(pagination.apply(filtered)))
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Search products by name; a blank or missing query yields no results
    #[instrument(skip(self))]
    pub async fn search_products(&self, name: Option<&str>) -> ProductResult<Vec<Product>> {
        let Some(name) = name.filter(|n| !n.trim().is_empty()) else {
            return Ok(Vec::new());
        };

        let products = self.repository.list().await?;
        Ok(search_by_name(products, name))
    }

    /// Total and per-category counts
    #[instrument(skip(self))]
    pub async fn product_stats(&self) -> ProductResult<CategoryStats> {
        let products = self.repository.list().await?;
        Ok(category_stats(&products))
    }

    /// Create a new product
    #[instrument(skip(self, payload))]
    pub async fn create_product(&self, payload: &Value) -> ProductResult<Product> {
        let input = ProductInput::from_payload(payload)?;
        self.repository.insert(input).await
    }

    /// Replace every field of an existing product
    #[instrument(skip(self, payload))]
    pub async fn update_product(&self, id: &str, payload: &Value) -> ProductResult<Product> {
        let input = ProductInput::from_payload(payload)?;
        self.repository.replace(id, input).await
    }

    /// Replace only the fields present in the payload
    #[instrument(skip(self, payload))]
    pub async fn patch_product(&self, id: &str, payload: &Value) -> ProductResult<Product> {
        let patch = ProductPatch::from_payload(payload)?;
        self.repository.patch(id, patch).await
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ProductResult<()> {
        self.repository.remove(id).await
    }
}
