// src/products/products_structs.rs

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::ApiError;

/// A catalog row as stored.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub brand: Option<String>,
    pub price: BigDecimal,
    pub stock_quantity: i32,
    pub sku: String,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating or replacing a catalog entry.
///
/// When an image exists it was already stored by the upload collaborator;
/// only its reference arrives here.
#[derive(Debug, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub brand: Option<String>,
    pub price: BigDecimal,
    pub stock_quantity: i32,
    pub sku: String,
    pub image_url: Option<String>,
}

impl NewProduct {
    /// Range checks applied before any storage interaction.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.price < BigDecimal::from(0) {
            return Err(ApiError::Validation("price must not be negative".into()));
        }
        if self.stock_quantity < 0 {
            return Err(ApiError::Validation(
                "stock_quantity must not be negative".into(),
            ));
        }
        Ok(())
    }
}

/// Body of `PATCH /products/{id}/stock`: an absolute restock, not a delta.
#[derive(Debug, Deserialize)]
pub struct StockUpdate {
    pub quantity: i32,
}
