// src/bills/settlement.rs

use uuid::Uuid;

use super::bills_structs::{Bill, NewBill};
use crate::error::ApiError;
use crate::stock::ledger;
use crate::store::Store;

/// Settles an incoming order as a single all-or-nothing unit.
///
/// Steps:
/// 1. Validates the order shape before touching storage.
/// 2. Opens a database transaction.
/// 3. Inserts the bill header under a freshly generated id.
/// 4. For each item, inserts the line and decrements the product's stock
///    through the conditional ledger update.
/// 5. If any item references an unknown product or would drive stock
///    negative, rolls the whole transaction back; nothing is persisted.
/// 6. Commits and returns the stored header.
///
/// Two orders competing for the last units cannot both succeed: the row
/// lock taken by the first decrement forces the second to re-evaluate the
/// stock condition after commit, where it matches no row.
pub async fn create_bill(store: &Store, order: NewBill) -> Result<Bill, ApiError> {
    order.validate()?;

    let bill_id = Uuid::new_v4();
    let mut transaction = store.pool().begin().await?;

    let bill = sqlx::query_as::<_, Bill>(
        "INSERT INTO bills (id, customer_name, phone_number, discount_percentage, \
                            total_amount, billed_by, payment_method) \
         VALUES ($1, $2, $3, $4, $5, $6, $7) \
         RETURNING id, customer_name, phone_number, discount_percentage, \
                   total_amount, billed_by, payment_method, created_at",
    )
    .bind(bill_id)
    .bind(&order.customer_name)
    .bind(&order.phone_number)
    .bind(&order.discount_percentage)
    .bind(&order.total_amount)
    .bind(&order.billed_by)
    .bind(order.payment_method_or_default())
    .fetch_one(&mut *transaction)
    .await?;

    for item in &order.items {
        sqlx::query(
            "INSERT INTO bill_items (bill_id, product_id, quantity, unit_price, total_price) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(bill_id)
        .bind(item.product_id)
        .bind(item.quantity)
        .bind(&item.unit_price)
        .bind(&item.total_price)
        .execute(&mut *transaction)
        .await
        .map_err(|e| unknown_product(e, item.product_id))?;

        let remaining =
            ledger::decrement(&mut *transaction, item.product_id, item.quantity).await?;
        if remaining.is_none() {
            transaction.rollback().await?;
            tracing::warn!(
                product_id = item.product_id,
                quantity = item.quantity,
                "order aborted: insufficient stock"
            );
            return Err(ApiError::InsufficientStock {
                product_id: item.product_id,
            });
        }
    }

    transaction.commit().await?;
    tracing::info!(bill_id = %bill.id, items = order.items.len(), "bill settled");
    Ok(bill)
}

/// Maps a foreign-key violation on bill_items to a client-addressable
/// conflict; any other failure stays a storage error.
fn unknown_product(e: sqlx::Error, product_id: i32) -> ApiError {
    if let sqlx::Error::Database(db) = &e {
        if db.code().as_deref() == Some("23503") {
            return ApiError::Conflict(format!("unknown product {product_id}"));
        }
    }
    ApiError::Storage(e)
}
