// src/error.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Every failure the core can surface, one variant per caller-visible kind.
///
/// All variants abort the enclosing unit of work before it commits; the core
/// never retries on its own.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or out-of-range input, rejected before any storage
    /// interaction.
    #[error("{0}")]
    Validation(String),

    /// A line item's conditional decrement found less stock than requested;
    /// the whole order was discarded.
    #[error("insufficient stock for product {product_id}")]
    InsufficientStock { product_id: i32 },

    /// A uniqueness or reference constraint was violated (duplicate SKU,
    /// unknown product id).
    #[error("{0}")]
    Conflict(String),

    /// The requested row does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The database failed underneath us. The unit of work is rolled back;
    /// the caller may retry.
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

/// Wire shape of every error response.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
}

impl ApiError {
    /// Stable machine-readable kind, so the presentation layer never has to
    /// parse messages.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation",
            ApiError::InsufficientStock { .. } => "insufficient_stock",
            ApiError::Conflict(_) => "conflict",
            ApiError::NotFound(_) => "not_found",
            ApiError::Storage(_) => "storage",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::InsufficientStock { .. } => StatusCode::CONFLICT,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Storage(e) = self {
            tracing::error!(error = %e, "storage failure surfaced to client");
        }
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
            code: self.code(),
        })
    }
}
