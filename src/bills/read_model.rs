// src/bills/read_model.rs

use std::collections::HashMap;

use uuid::Uuid;

use super::bills_structs::{Bill, BillItemDetail, BillItemRow, BillWithItems};
use crate::error::ApiError;
use crate::store::Store;

const BILL_COLUMNS: &str = "id, customer_name, phone_number, discount_percentage, \
                            total_amount, billed_by, payment_method, created_at";

const ITEM_COLUMNS: &str = "bi.bill_id, bi.id, bi.quantity, bi.unit_price, bi.total_price, \
                            p.id AS product_id, p.name AS product_name, \
                            p.category AS product_category, p.brand AS product_brand";

/// Fetches one bill with its items and product snapshots.
pub async fn get_bill(store: &Store, bill_id: Uuid) -> Result<BillWithItems, ApiError> {
    let bill = sqlx::query_as::<_, Bill>(&format!(
        "SELECT {BILL_COLUMNS} FROM bills WHERE id = $1"
    ))
    .bind(bill_id)
    .fetch_optional(store.pool())
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("bill {bill_id} not found")))?;

    let items = sqlx::query_as::<_, BillItemRow>(&format!(
        "SELECT {ITEM_COLUMNS} \
         FROM bill_items bi \
         JOIN products p ON p.id = bi.product_id \
         WHERE bi.bill_id = $1 \
         ORDER BY bi.id"
    ))
    .bind(bill_id)
    .fetch_all(store.pool())
    .await?;

    Ok(BillWithItems {
        bill,
        items: items.into_iter().map(BillItemRow::into_detail).collect(),
    })
}

/// Lists every bill with its items, newest first.
///
/// Headers are read before items, so an order settling concurrently can at
/// worst contribute item rows with no matching header here; those are
/// dropped during grouping. A header is never served with missing items.
pub async fn list_bills(store: &Store) -> Result<Vec<BillWithItems>, ApiError> {
    let bills = sqlx::query_as::<_, Bill>(&format!(
        "SELECT {BILL_COLUMNS} FROM bills ORDER BY created_at DESC, id"
    ))
    .fetch_all(store.pool())
    .await?;

    let items = sqlx::query_as::<_, BillItemRow>(&format!(
        "SELECT {ITEM_COLUMNS} \
         FROM bill_items bi \
         JOIN products p ON p.id = bi.product_id \
         ORDER BY bi.id"
    ))
    .fetch_all(store.pool())
    .await?;

    Ok(group_items(bills, items))
}

/// Attaches item rows to their bill headers, preserving header order.
fn group_items(bills: Vec<Bill>, items: Vec<BillItemRow>) -> Vec<BillWithItems> {
    let mut by_bill: HashMap<Uuid, Vec<BillItemDetail>> = HashMap::new();
    for row in items {
        by_bill
            .entry(row.bill_id)
            .or_default()
            .push(row.into_detail());
    }

    bills
        .into_iter()
        .map(|bill| {
            let items = by_bill.remove(&bill.id).unwrap_or_default();
            BillWithItems { bill, items }
        })
        .collect()
}
