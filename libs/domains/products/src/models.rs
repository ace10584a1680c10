use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Product entity - a single catalog item
///
/// Serialized with camelCase field names (`stockQuantity`), the wire format
/// catalog clients already consume.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, assigned on creation
    pub id: Uuid,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Price in the store currency
    pub price: f64,
    /// Count of units currently available
    pub stock_quantity: i32,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub stock_quantity: i32,
}

impl Product {
    /// Create a new product from a CreateProduct DTO, assigning a fresh identifier
    pub fn new(input: CreateProduct) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            description: input.description,
            price: input.price,
            stock_quantity: input.stock_quantity,
        }
    }

    /// Check if the product is in stock
    pub fn is_in_stock(&self) -> bool {
        self.stock_quantity > 0
    }
}
