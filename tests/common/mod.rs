// tests/common/mod.rs

#![allow(dead_code)]

use bigdecimal::BigDecimal;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use shopdesk::bills::bills_structs::{NewBill, NewBillItem};
use shopdesk::products::products_store;
use shopdesk::products::products_structs::{NewProduct, Product};
use shopdesk::store::Store;

/// Connects to the database named by `TEST_DATABASE_URL` and applies the
/// migrations. The suites using this are `#[ignore]`d, so a plain
/// `cargo test` passes without a database; run them with `-- --ignored`.
///
/// The pool is built here and handed to `Store::new`, keeping its sizing
/// under the suite's control.
pub async fn test_store() -> Store {
    let url = std::env::var("TEST_DATABASE_URL")
        .expect("set TEST_DATABASE_URL to run the database suites");
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await
        .expect("connect to test database");
    let store = Store::new(pool);
    store.run_migrations().await.expect("apply migrations");
    store
}

/// Seeds one active product with a unique SKU.
pub async fn seed_product(store: &Store, price: i32, stock: i32) -> Product {
    let tag = Uuid::new_v4();
    products_store::insert_product(
        store,
        NewProduct {
            name: format!("Test product {tag}"),
            description: None,
            category: "test".to_string(),
            brand: None,
            price: BigDecimal::from(price),
            stock_quantity: stock,
            sku: format!("TEST-{tag}"),
            image_url: None,
        },
    )
    .await
    .expect("seed product")
}

/// One order line priced at `unit_price` per unit.
pub fn line(product_id: i32, quantity: i32, unit_price: i32) -> NewBillItem {
    NewBillItem {
        product_id,
        quantity,
        unit_price: BigDecimal::from(unit_price),
        total_price: BigDecimal::from(unit_price * quantity),
    }
}

/// An undiscounted order whose total is the sum of its lines.
pub fn order(customer: &str, items: Vec<NewBillItem>) -> NewBill {
    let total = items
        .iter()
        .fold(BigDecimal::from(0), |acc, item| acc + &item.total_price);
    NewBill {
        customer_name: customer.to_string(),
        phone_number: None,
        discount_percentage: BigDecimal::from(0),
        total_amount: total,
        billed_by: "till-1".to_string(),
        payment_method: None,
        items,
    }
}
