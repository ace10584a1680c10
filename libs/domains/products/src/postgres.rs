use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{CreateProduct, Product},
    repository::ProductRepository,
};

/// PostgreSQL implementation of ProductRepository (SeaORM)
pub struct PgProductRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        // Convert CreateProduct to ActiveModel (assigns the identifier)
        let active_model: entity::ActiveModel = input.into();

        let model = self
            .base
            .insert(active_model)
            .await
            .map_err(|e| ProductError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(product_id = %model.id, "Created product");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let model = self
            .base
            .find_by_id(id)
            .await
            .map_err(|e| ProductError::Internal(format!("Database error: {}", e)))?;

        Ok(model.map(|m| m.into()))
    }
}
