// src/bills/bills_router.rs

use actix_web::{get, post, web, HttpResponse};
use uuid::Uuid;

use super::bills_structs::NewBill;
use super::{read_model, settlement};
use crate::error::ApiError;
use crate::AppState;

/// Settles an order: writes the bill, its items and the stock decrements in
/// one transaction. Responds 201 with the stored header, 409 when stock is
/// insufficient or a product is unknown, 400 on a malformed order.
#[post("/bills")]
pub async fn create_bill(
    data: web::Data<AppState>,
    order: web::Json<NewBill>,
) -> Result<HttpResponse, ApiError> {
    let bill = settlement::create_bill(&data.store, order.into_inner()).await?;
    Ok(HttpResponse::Created().json(bill))
}

/// Lists every bill with items and product snapshots, newest first.
#[get("/bills")]
pub async fn list_bills(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let bills = read_model::list_bills(&data.store).await?;
    Ok(HttpResponse::Ok().json(bills))
}

/// Fetches one bill with items and product snapshots.
#[get("/bills/{id}")]
pub async fn get_bill(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let bill = read_model::get_bill(&data.store, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(bill))
}
