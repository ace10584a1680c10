use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product};

/// Repository trait for Product persistence
///
/// This trait defines the data access interface for products.
/// Implementations can use different storage backends (PostgreSQL, in-memory, etc.)
///
/// `get_by_id` returns `Ok(None)` for an unknown identifier - converting
/// absence into a NotFound failure is the service's responsibility.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Create a new product, assigning its identifier
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        let product = Product::new(input);
        products.insert(product.id, product.clone());

        tracing::info!(product_id = %product.id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_get_product() {
        let repo = InMemoryProductRepository::new();

        let input = CreateProduct {
            name: "Laptop".to_string(),
            description: "High-end gaming laptop".to_string(),
            price: 1500.0,
            stock_quantity: 10,
        };

        let product = repo.create(input).await.unwrap();
        assert_eq!(product.name, "Laptop");

        let fetched = repo.get_by_id(product.id).await.unwrap();
        assert!(fetched.is_some());
        assert_eq!(fetched.unwrap().id, product.id);
    }

    #[tokio::test]
    async fn test_get_by_id_returns_none_for_unknown() {
        let repo = InMemoryProductRepository::new();

        let fetched = repo.get_by_id(Uuid::new_v4()).await.unwrap();
        assert!(fetched.is_none());
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_ids() {
        let repo = InMemoryProductRepository::new();

        let input = CreateProduct {
            name: "Keyboard".to_string(),
            description: String::new(),
            price: 50.0,
            stock_quantity: 3,
        };

        let first = repo.create(input.clone()).await.unwrap();
        let second = repo.create(input).await.unwrap();
        assert_ne!(first.id, second.id);
    }
}
