// src/stock/ledger.rs
//
// The only place in the system that subtracts stock. Everything else either
// reads the quantity or replaces it wholesale (restocking).

use sqlx::PgConnection;

/// Conditionally decrements a product's stock by `quantity`.
///
/// The availability check and the write are a single statement, never a read
/// followed by a write, so two settlements racing for the same units
/// serialize at the row: the first to lock it wins, the second re-evaluates
/// the condition against the committed value.
///
/// Returns the remaining quantity on success, or `None` when the row was not
/// updated because the stock on hand is smaller than `quantity`. That no-op
/// is the insufficient-stock signal; it is not a database error. A
/// non-positive `quantity` gets the same no-op answer before any SQL runs,
/// since subtracting a negative value would add stock.
///
/// Runs on the coordinator's open transaction.
pub async fn decrement(
    conn: &mut PgConnection,
    product_id: i32,
    quantity: i32,
) -> Result<Option<i32>, sqlx::Error> {
    if quantity <= 0 {
        return Ok(None);
    }

    sqlx::query_scalar::<_, i32>(
        "UPDATE products
         SET stock_quantity = stock_quantity - $2, updated_at = now()
         WHERE id = $1 AND stock_quantity >= $2
         RETURNING stock_quantity",
    )
    .bind(product_id)
    .bind(quantity)
    .fetch_optional(conn)
    .await
}
