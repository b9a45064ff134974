// src/products/products_store.rs

use super::products_structs::{NewProduct, Product};
use crate::error::ApiError;
use crate::store::Store;

const PRODUCT_COLUMNS: &str = "id, name, description, category, brand, price, stock_quantity, \
                               sku, image_url, is_active, created_at, updated_at";

/// All active catalog entries, ordered by name.
pub async fn list_products(store: &Store) -> Result<Vec<Product>, ApiError> {
    let products = sqlx::query_as::<_, Product>(&format!(
        "SELECT {PRODUCT_COLUMNS} FROM products WHERE is_active = TRUE ORDER BY name ASC"
    ))
    .fetch_all(store.pool())
    .await?;
    Ok(products)
}

/// A single active catalog entry.
pub async fn get_product(store: &Store, id: i32) -> Result<Product, ApiError> {
    sqlx::query_as::<_, Product>(&format!(
        "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1 AND is_active = TRUE"
    ))
    .bind(id)
    .fetch_optional(store.pool())
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("product {id} not found")))
}

/// Creates a catalog entry. A SKU collision is rejected, never overwritten.
pub async fn insert_product(store: &Store, new: NewProduct) -> Result<Product, ApiError> {
    new.validate()?;

    let product = sqlx::query_as::<_, Product>(&format!(
        "INSERT INTO products (name, description, category, brand, price, stock_quantity, sku, image_url)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
         RETURNING {PRODUCT_COLUMNS}"
    ))
    .bind(&new.name)
    .bind(&new.description)
    .bind(&new.category)
    .bind(&new.brand)
    .bind(&new.price)
    .bind(new.stock_quantity)
    .bind(&new.sku)
    .bind(&new.image_url)
    .fetch_one(store.pool())
    .await
    .map_err(sku_conflict)?;

    tracing::info!(product_id = product.id, sku = %product.sku, "product created");
    Ok(product)
}

/// Full update of the catalog fields. Stock set here is the restock path,
/// not a settlement decrement.
pub async fn update_product(store: &Store, id: i32, new: NewProduct) -> Result<Product, ApiError> {
    new.validate()?;

    sqlx::query_as::<_, Product>(&format!(
        "UPDATE products
         SET name = $2, description = $3, category = $4, brand = $5, price = $6,
             stock_quantity = $7, sku = $8, image_url = $9, updated_at = now()
         WHERE id = $1
         RETURNING {PRODUCT_COLUMNS}"
    ))
    .bind(id)
    .bind(&new.name)
    .bind(&new.description)
    .bind(&new.category)
    .bind(&new.brand)
    .bind(&new.price)
    .bind(new.stock_quantity)
    .bind(&new.sku)
    .bind(&new.image_url)
    .fetch_optional(store.pool())
    .await
    .map_err(sku_conflict)?
    .ok_or_else(|| ApiError::NotFound(format!("product {id} not found")))
}

/// Soft delete: the entry disappears from catalog reads but stays referenced
/// by historical bills.
pub async fn deactivate_product(store: &Store, id: i32) -> Result<(), ApiError> {
    let result = sqlx::query(
        "UPDATE products SET is_active = FALSE, updated_at = now() WHERE id = $1",
    )
    .bind(id)
    .execute(store.pool())
    .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound(format!("product {id} not found")));
    }
    Ok(())
}

/// Absolute restock: replaces the stock quantity with `quantity`.
pub async fn set_stock(store: &Store, id: i32, quantity: i32) -> Result<Product, ApiError> {
    if quantity < 0 {
        return Err(ApiError::Validation(
            "quantity must not be negative".into(),
        ));
    }

    sqlx::query_as::<_, Product>(&format!(
        "UPDATE products SET stock_quantity = $2, updated_at = now()
         WHERE id = $1
         RETURNING {PRODUCT_COLUMNS}"
    ))
    .bind(id)
    .bind(quantity)
    .fetch_optional(store.pool())
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("product {id} not found")))
}

/// SQLSTATE 23505 on the SKU unique index means the SKU is taken.
fn sku_conflict(e: sqlx::Error) -> ApiError {
    if let sqlx::Error::Database(db) = &e {
        if db.code().as_deref() == Some("23505") {
            return ApiError::Conflict("SKU already exists".to_string());
        }
    }
    ApiError::Storage(e)
}
