// src/lib.rs

//! Back-office API for a small retail shop: product catalog, shop profile,
//! and order settlement. Settling an order writes the bill header, its line
//! items and the matching stock decrements in one database transaction, so
//! concurrent orders can never oversell a product.

use actix_web::{get, web, HttpResponse, Responder};

pub mod bills;
pub mod config;
pub mod error;
pub mod products;
pub mod shop;
pub mod stock;
pub mod store;

use store::Store;

/// Shared state handed to every route.
pub struct AppState {
    pub store: Store,
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Registers every route on an actix `App`. Kept out of `main` so the test
/// suites can mount the same surface.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health)
        // catalog
        .service(products::products_router::list_products)
        .service(products::products_router::get_product)
        .service(products::products_router::create_product)
        .service(products::products_router::update_product)
        .service(products::products_router::delete_product)
        .service(products::products_router::set_stock)
        // billing
        .service(bills::bills_router::create_bill)
        .service(bills::bills_router::list_bills)
        .service(bills::bills_router::get_bill)
        // shop profile
        .service(shop::shop_router::get_settings)
        .service(shop::shop_router::update_settings);
}
