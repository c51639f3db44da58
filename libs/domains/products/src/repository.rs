use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductInput, ProductPatch};

/// Repository trait for Product persistence
///
/// Implementations keep insertion order for `list`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products in insertion order
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by ID
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>>;

    /// Store a new product under a freshly generated ID
    async fn insert(&self, input: ProductInput) -> ProductResult<Product>;

    /// Overwrite every field except the ID
    async fn replace(&self, id: &str, input: ProductInput) -> ProductResult<Product>;

    /// Overwrite only the fields present in the patch
    async fn patch(&self, id: &str, patch: ProductPatch) -> ProductResult<Product>;

    /// Delete a product by ID
    async fn remove(&self, id: &str) -> ProductResult<()>;

    /// Number of stored products
    async fn count(&self) -> ProductResult<usize>;
}

/// In-memory implementation of ProductRepository
///
/// Each mutation holds the write guard from lookup to write-back.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.clone())
    }

    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, input: ProductInput) -> ProductResult<Product> {
        let product = Product::from_input(Uuid::new_v4().to_string(), input);

        let mut products = self.products.write().await;
        products.push(product.clone());

        tracing::info!(product_id = %product.id, "Created product");
        Ok(product)
    }

    async fn replace(&self, id: &str, input: ProductInput) -> ProductResult<Product> {
        let mut products = self.products.write().await;
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;

        product.apply(input);

        tracing::info!(product_id = %id, "Replaced product");
        Ok(product.clone())
    }

    async fn patch(&self, id: &str, patch: ProductPatch) -> ProductResult<Product> {
        let mut products = self.products.write().await;
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;

        product.apply_patch(patch);

        tracing::info!(product_id = %id, "Patched product");
        Ok(product.clone())
    }

    async fn remove(&self, id: &str) -> ProductResult<()> {
        let mut products = self.products.write().await;
        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;

        products.remove(index);

        tracing::info!(product_id = %id, "Deleted product");
        Ok(())
    }

    async fn count(&self) -> ProductResult<usize> {
        Ok(self.products.read().await.len())
    }
}
