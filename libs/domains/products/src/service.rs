//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// The service layer handles validation, business rules, and orchestrates
/// repository operations. It owns the single business rule of the catalog:
/// a product is in stock iff its stock quantity is strictly positive.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        // Validate input
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: Uuid) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Check if a product is in stock
    ///
    /// Inherits the NotFound failure of `get_product` - an unknown identifier
    /// is an error, never a `false`.
    #[instrument(skip(self))]
    pub async fn is_in_stock(&self, id: Uuid) -> ProductResult<bool> {
        let product = self.get_product(id).await?;
        Ok(product.is_in_stock())
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;

    fn laptop() -> CreateProduct {
        CreateProduct {
            name: "Laptop".to_string(),
            description: "High-end gaming laptop".to_string(),
            price: 1500.0,
            stock_quantity: 10,
        }
    }

    fn stored(id: Uuid, stock_quantity: i32) -> Product {
        Product {
            id,
            name: "Laptop".to_string(),
            description: "High-end gaming laptop".to_string(),
            price: 1500.0,
            stock_quantity,
        }
    }

    #[tokio::test]
    async fn test_create_product_successfully() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|input| Ok(Product::new(input)));

        let service = ProductService::new(mock_repo);
        let created = service.create_product(laptop()).await.unwrap();

        assert_eq!(created.name, "Laptop");
        assert_eq!(created.price, 1500.0);
        assert!(!created.id.is_nil());
    }

    #[tokio::test]
    async fn test_create_product_rejects_invalid_input() {
        let mut mock_repo = MockProductRepository::new();
        // Repository must not be touched for invalid input
        mock_repo.expect_create().times(0);

        let service = ProductService::new(mock_repo);

        let mut input = laptop();
        input.price = -10.0;
        let result = service.create_product(input).await;

        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_product_by_id() {
        let id = Uuid::now_v7();
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(id))
            .times(1)
            .returning(move |_| Ok(Some(stored(id, 10))));

        let service = ProductService::new(mock_repo);
        let found = service.get_product(id).await.unwrap();

        assert_eq!(found.name, "Laptop");
        assert_eq!(found.id, id);
    }

    #[tokio::test]
    async fn test_get_product_not_found() {
        let id = Uuid::now_v7();
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(id))
            .times(1)
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let result = service.get_product(id).await;

        assert!(matches!(result, Err(ProductError::NotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn test_is_in_stock_true_for_positive_quantity() {
        let id = Uuid::now_v7();
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(id))
            .times(1)
            .returning(move |_| Ok(Some(stored(id, 10))));

        let service = ProductService::new(mock_repo);
        assert!(service.is_in_stock(id).await.unwrap());
    }

    #[tokio::test]
    async fn test_is_in_stock_false_for_zero_quantity() {
        let id = Uuid::now_v7();
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(id))
            .times(1)
            .returning(move |_| Ok(Some(stored(id, 0))));

        let service = ProductService::new(mock_repo);
        assert!(!service.is_in_stock(id).await.unwrap());
    }

    #[tokio::test]
    async fn test_is_in_stock_propagates_not_found() {
        let id = Uuid::now_v7();
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(id))
            .times(1)
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let result = service.is_in_stock(id).await;

        assert!(matches!(result, Err(ProductError::NotFound(_))));
    }
}
