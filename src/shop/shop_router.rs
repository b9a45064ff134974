// src/shop/shop_router.rs

use actix_web::{get, put, web, HttpResponse};

use super::shop_store;
use super::shop_structs::ShopSettingsUpdate;
use crate::error::ApiError;
use crate::AppState;

/// Returns the shop profile printed on receipts.
#[get("/shop-settings")]
pub async fn get_settings(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let settings = shop_store::get_settings(&data.store).await?;
    Ok(HttpResponse::Ok().json(settings))
}

/// Replaces the shop profile. 404 until a profile row has been seeded.
#[put("/shop-settings")]
pub async fn update_settings(
    data: web::Data<AppState>,
    update: web::Json<ShopSettingsUpdate>,
) -> Result<HttpResponse, ApiError> {
    let settings = shop_store::update_settings(&data.store, update.into_inner()).await?;
    Ok(HttpResponse::Ok().json(settings))
}
