//! Integration tests for the Products domain
//!
//! These tests use real PostgreSQL via testcontainers to ensure:
//! - The startup DDL creates a usable products table
//! - Database queries work correctly
//! - Column defaults and generated ids behave as expected
//!
//! They are ignored by default because they need a Docker daemon. Run them
//! with `cargo test -- --ignored`.

use domain_products::*;
use test_utils::{TestDatabase, TestDataBuilder, assertions::*};

async fn pg_repository(db: &TestDatabase) -> PgProductRepository {
    ensure_schema(&db.connection)
        .await
        .expect("Failed to create products table");
    PgProductRepository::new(db.connection())
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_create_and_find_product() {
    let db = TestDatabase::new().await;
    let repo = pg_repository(&db).await;
    let builder = TestDataBuilder::from_test_name("create_and_find");

    let input = CreateProduct {
        name: builder.name("product", "main"),
        price: builder.price(),
    };

    let created = repo.create(input.clone()).await.unwrap();

    assert!(created.id >= 1);
    assert_eq!(created.name, input.name);
    assert_eq!(created.price, input.price);
    assert!(created.availability, "availability should default to true");

    let retrieved = repo.find_by_id(created.id).await.unwrap();
    let retrieved = assert_some(retrieved, "product should exist");
    assert_eq!(retrieved, created);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_find_by_id_returns_none_for_missing() {
    let db = TestDatabase::new().await;
    let repo = pg_repository(&db).await;

    let result = repo.find_by_id(9999).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_find_all_orders_by_id_descending() {
    let db = TestDatabase::new().await;
    let repo = pg_repository(&db).await;
    let builder = TestDataBuilder::from_test_name("find_all_order");

    for suffix in ["first", "second", "third"] {
        repo.create(CreateProduct {
            name: builder.name("product", suffix),
            price: builder.price(),
        })
        .await
        .unwrap();
    }

    let products = repo.find_all().await.unwrap();

    assert_eq!(products.len(), 3);
    assert_eq!(products[0].name, builder.name("product", "third"));
    assert_eq!(products[2].name, builder.name("product", "first"));
    assert!(products[0].id > products[1].id && products[1].id > products[2].id);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_update_replaces_all_fields() {
    let db = TestDatabase::new().await;
    let repo = pg_repository(&db).await;
    let builder = TestDataBuilder::from_test_name("pg_update");

    let created = repo
        .create(CreateProduct {
            name: builder.name("product", "before"),
            price: builder.price(),
        })
        .await
        .unwrap();

    let updated = repo
        .update(
            created.id,
            UpdateProduct {
                name: builder.name("product", "after"),
                price: 75.25,
                availability: false,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, builder.name("product", "after"));
    assert_eq!(updated.price, 75.25);
    assert!(!updated.availability);

    let retrieved = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(assert_some(retrieved, "product should exist"), updated);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_update_missing_product_errors() {
    let db = TestDatabase::new().await;
    let repo = pg_repository(&db).await;

    let result = repo
        .update(
            9999,
            UpdateProduct {
                name: "ghost".to_string(),
                price: 1.0,
                availability: true,
            },
        )
        .await;

    assert!(
        matches!(result, Err(ProductError::NotFound(9999))),
        "Expected NotFound error, got {:?}",
        result
    );
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_delete_reports_removed_row() {
    let db = TestDatabase::new().await;
    let repo = pg_repository(&db).await;
    let builder = TestDataBuilder::from_test_name("pg_delete");

    let created = repo
        .create(CreateProduct {
            name: builder.name("product", "doomed"),
            price: builder.price(),
        })
        .await
        .unwrap();

    assert!(repo.delete(created.id).await.unwrap());
    assert!(!repo.delete(created.id).await.unwrap());
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_toggle_availability_through_service() {
    let db = TestDatabase::new().await;
    let repo = pg_repository(&db).await;
    let service = ProductService::new(repo);
    let builder = TestDataBuilder::from_test_name("pg_toggle");

    let created = service
        .create_product(CreateProduct {
            name: builder.name("product", "toggle"),
            price: builder.price(),
        })
        .await
        .unwrap();
    assert!(created.availability);

    let toggled = service.toggle_availability(created.id).await.unwrap();
    assert!(!toggled.availability);

    let restored = service.toggle_availability(created.id).await.unwrap();
    assert!(restored.availability);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_ensure_schema_is_idempotent() {
    let db = TestDatabase::new().await;

    ensure_schema(&db.connection).await.unwrap();
    ensure_schema(&db.connection).await.unwrap();

    let repo = PgProductRepository::new(db.connection());
    assert!(repo.find_all().await.unwrap().is_empty());
}
