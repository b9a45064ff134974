// src/bills/bills_structs.rs

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::ApiError;

/// Payment method recorded when the terminal omits one.
pub const DEFAULT_PAYMENT_METHOD: &str = "cash";

/// A settled bill header as stored. Immutable once written.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Bill {
    pub id: Uuid,
    pub customer_name: String,
    pub phone_number: Option<String>,
    pub discount_percentage: BigDecimal,
    pub total_amount: BigDecimal,
    pub billed_by: String,
    pub payment_method: String,
    pub created_at: DateTime<Utc>,
}

/// One line of an incoming order.
///
/// `unit_price` and `total_price` are the terminal's scan-time snapshot and
/// are persisted as given, independent of the live catalog price.
#[derive(Debug, Clone, Deserialize)]
pub struct NewBillItem {
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: BigDecimal,
    pub total_price: BigDecimal,
}

/// An incoming order, as delivered by a point-of-sale terminal.
#[derive(Debug, Deserialize)]
pub struct NewBill {
    pub customer_name: String,
    pub phone_number: Option<String>,
    pub discount_percentage: BigDecimal,
    pub total_amount: BigDecimal,
    pub billed_by: String,
    pub payment_method: Option<String>,
    pub items: Vec<NewBillItem>,
}

impl NewBill {
    /// Shape and range checks, applied before any storage interaction.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.items.is_empty() {
            return Err(ApiError::Validation("order has no items".into()));
        }

        let zero = BigDecimal::from(0);
        if self.discount_percentage < zero || self.discount_percentage > BigDecimal::from(100) {
            return Err(ApiError::Validation(
                "discount_percentage must be between 0 and 100".into(),
            ));
        }
        if self.total_amount < zero {
            return Err(ApiError::Validation(
                "total_amount must not be negative".into(),
            ));
        }

        for item in &self.items {
            if item.quantity < 1 {
                return Err(ApiError::Validation(format!(
                    "quantity for product {} must be positive",
                    item.product_id
                )));
            }
            if item.unit_price < zero || item.total_price < zero {
                return Err(ApiError::Validation(format!(
                    "prices for product {} must not be negative",
                    item.product_id
                )));
            }
        }
        Ok(())
    }

    /// The payment method to record, falling back to the cash designation.
    pub fn payment_method_or_default(&self) -> &str {
        self.payment_method
            .as_deref()
            .unwrap_or(DEFAULT_PAYMENT_METHOD)
    }
}

/// Product display attributes embedded in a bill item projection.
#[derive(Debug, Clone, Serialize)]
pub struct ProductSnapshot {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub brand: Option<String>,
}

/// One settled line item with its product snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct BillItemDetail {
    pub id: i32,
    pub quantity: i32,
    pub unit_price: BigDecimal,
    pub total_price: BigDecimal,
    pub product: ProductSnapshot,
}

/// A bill with its items, as served by the read model.
#[derive(Debug, Serialize)]
pub struct BillWithItems {
    #[serde(flatten)]
    pub bill: Bill,
    pub items: Vec<BillItemDetail>,
}

/// Flat row produced by the bill_items ⋈ products join.
#[derive(Debug, FromRow)]
pub struct BillItemRow {
    pub bill_id: Uuid,
    pub id: i32,
    pub quantity: i32,
    pub unit_price: BigDecimal,
    pub total_price: BigDecimal,
    pub product_id: i32,
    pub product_name: String,
    pub product_category: String,
    pub product_brand: Option<String>,
}

impl BillItemRow {
    /// Reshapes the flat join row into the nested projection form.
    pub fn into_detail(self) -> BillItemDetail {
        BillItemDetail {
            id: self.id,
            quantity: self.quantity,
            unit_price: self.unit_price,
            total_price: self.total_price,
            product: ProductSnapshot {
                id: self.product_id,
                name: self.product_name,
                category: self.product_category,
                brand: self.product_brand,
            },
        }
    }
}
