// tests/products_test.rs

//! Catalog maintenance against a live PostgreSQL database.
//!
//! Set `TEST_DATABASE_URL` and run `cargo test -- --ignored`.

mod common;

use bigdecimal::BigDecimal;
use uuid::Uuid;

use shopdesk::bills::{read_model, settlement};
use shopdesk::error::ApiError;
use shopdesk::products::products_store;
use shopdesk::products::products_structs::NewProduct;

fn entry(name: &str, sku: &str, price: i32) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: None,
        category: "test".to_string(),
        brand: None,
        price: BigDecimal::from(price),
        stock_quantity: 1,
        sku: sku.to_string(),
        image_url: None,
    }
}

#[actix_web::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn a_sku_collision_is_rejected_without_overwriting() {
    let store = common::test_store().await;
    let p = common::seed_product(&store, 10, 5).await;

    let err = products_store::insert_product(&store, entry("Impostor", &p.sku, 99))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Conflict(_)));

    // The existing entry is untouched.
    let unchanged = products_store::get_product(&store, p.id).await.unwrap();
    assert_eq!(unchanged.name, p.name);
    assert_eq!(unchanged.price, BigDecimal::from(10));
}

#[actix_web::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn an_update_cannot_steal_another_products_sku() {
    let store = common::test_store().await;
    let a = common::seed_product(&store, 10, 5).await;
    let b = common::seed_product(&store, 20, 5).await;

    let err = products_store::update_product(&store, b.id, entry(&b.name, &a.sku, 20))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Conflict(_)));

    // b keeps its own SKU.
    let unchanged = products_store::get_product(&store, b.id).await.unwrap();
    assert_eq!(unchanged.sku, b.sku);
}

#[actix_web::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn the_catalog_lists_products_in_name_order() {
    let store = common::test_store().await;
    let tag = Uuid::new_v4();

    // Inserted out of name order; the listing must sort them back.
    for suffix in ["2", "3", "1"] {
        let name = format!("Catalog {tag} {suffix}");
        let sku = format!("TEST-{}", Uuid::new_v4());
        products_store::insert_product(&store, entry(&name, &sku, 5))
            .await
            .unwrap();
    }

    let listed = products_store::list_products(&store).await.unwrap();
    let positions: Vec<usize> = ["1", "2", "3"]
        .iter()
        .map(|suffix| {
            let name = format!("Catalog {tag} {suffix}");
            listed
                .iter()
                .position(|p| p.name == name)
                .expect("seeded product listed")
        })
        .collect();
    assert!(positions[0] < positions[1]);
    assert!(positions[1] < positions[2]);
}

#[actix_web::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn a_deactivated_product_leaves_the_catalog_but_keeps_its_bills() {
    let store = common::test_store().await;
    let p = common::seed_product(&store, 10, 5).await;

    let bill = settlement::create_bill(
        &store,
        common::order("Asha", vec![common::line(p.id, 1, 10)]),
    )
    .await
    .unwrap();

    products_store::deactivate_product(&store, p.id).await.unwrap();

    // Gone from catalog reads.
    let err = products_store::get_product(&store, p.id).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
    let listed = products_store::list_products(&store).await.unwrap();
    assert!(listed.iter().all(|x| x.id != p.id));

    // Still named on the historical bill.
    let detail = read_model::get_bill(&store, bill.id).await.unwrap();
    assert_eq!(detail.items[0].product.id, p.id);
    assert_eq!(detail.items[0].product.name, p.name);
}

#[actix_web::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn restocking_replaces_the_quantity_outright() {
    let store = common::test_store().await;
    let p = common::seed_product(&store, 10, 3).await;

    let restocked = products_store::set_stock(&store, p.id, 10).await.unwrap();
    assert_eq!(restocked.stock_quantity, 10);

    let err = products_store::set_stock(&store, p.id, -1).await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
}

#[actix_web::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn unknown_ids_report_not_found() {
    let store = common::test_store().await;

    assert!(matches!(
        products_store::get_product(&store, i32::MAX).await.unwrap_err(),
        ApiError::NotFound(_)
    ));
    assert!(matches!(
        products_store::deactivate_product(&store, i32::MAX).await.unwrap_err(),
        ApiError::NotFound(_)
    ));
    assert!(matches!(
        products_store::set_stock(&store, i32::MAX, 5).await.unwrap_err(),
        ApiError::NotFound(_)
    ));

    let fresh_sku = format!("TEST-{}", Uuid::new_v4());
    assert!(matches!(
        products_store::update_product(&store, i32::MAX, entry("Ghost", &fresh_sku, 1))
            .await
            .unwrap_err(),
        ApiError::NotFound(_)
    ));
}
