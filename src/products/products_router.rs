// src/products/products_router.rs

use actix_web::{delete, get, patch, post, put, web, HttpResponse};

use super::products_store;
use super::products_structs::{NewProduct, StockUpdate};
use crate::error::ApiError;
use crate::AppState;

/// All active products, ordered by name.
#[get("/products")]
pub async fn list_products(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let products = products_store::list_products(&data.store).await?;
    Ok(HttpResponse::Ok().json(products))
}

/// A single active product, 404 when absent.
#[get("/products/{id}")]
pub async fn get_product(
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let product = products_store::get_product(&data.store, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(product))
}

/// Creates a catalog entry; a SKU collision answers 409.
#[post("/products")]
pub async fn create_product(
    data: web::Data<AppState>,
    body: web::Json<NewProduct>,
) -> Result<HttpResponse, ApiError> {
    let product = products_store::insert_product(&data.store, body.into_inner()).await?;
    Ok(HttpResponse::Created().json(product))
}

/// Full update of a catalog entry.
#[put("/products/{id}")]
pub async fn update_product(
    data: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<NewProduct>,
) -> Result<HttpResponse, ApiError> {
    let product =
        products_store::update_product(&data.store, path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(product))
}

/// Soft delete. Historical bills keep referencing the deactivated row.
#[delete("/products/{id}")]
pub async fn delete_product(
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    products_store::deactivate_product(&data.store, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "product deactivated" })))
}

/// Absolute restock of one product (receiving inventory). Settlement never
/// goes through here.
#[patch("/products/{id}/stock")]
pub async fn set_stock(
    data: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<StockUpdate>,
) -> Result<HttpResponse, ApiError> {
    let product =
        products_store::set_stock(&data.store, path.into_inner(), body.quantity).await?;
    Ok(HttpResponse::Ok().json(product))
}
