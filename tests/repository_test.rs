mod common;

use assert_matches::assert_matches;
use catalog_api::{
    dto::{CategoryInput, ProductInput},
    errors::ServiceError,
};
use rust_decimal_macros::dec;
use serde_json::json;

use common::TestApp;

fn category(name: &str) -> CategoryInput {
    CategoryInput {
        name: name.to_string(),
        description: None,
        image_url: None,
    }
}

fn product(body: serde_json::Value) -> ProductInput {
    serde_json::from_value(body).expect("valid product input")
}

#[tokio::test]
async fn category_crud_cycle() {
    let app = TestApp::new().await;
    let repo = app.categories();

    let created = repo.create(category("Kırtasiye")).await.unwrap();
    assert_eq!(repo.get(created.id).await.unwrap(), Some(created.clone()));

    let mut input = category("Kırtasiye & Ofis");
    input.description = Some("Kalem, defter".into());
    let updated = repo.update(created.id, input).await.unwrap().unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.description.as_deref(), Some("Kalem, defter"));

    let deleted = repo.delete(created.id).await.unwrap();
    assert_eq!(deleted, Some(updated));
    assert_eq!(repo.get(created.id).await.unwrap(), None);
    assert_eq!(repo.delete(created.id).await.unwrap(), None);
}

#[tokio::test]
async fn absent_rows_yield_none() {
    let app = TestApp::new().await;
    assert_eq!(app.categories().get(1).await.unwrap(), None);
    assert_eq!(
        app.categories().update(1, category("x")).await.unwrap(),
        None
    );
    assert_eq!(
        app.products()
            .update(1, product(json!({"name": "x", "price": 1})))
            .await
            .unwrap(),
        None
    );
    assert_eq!(app.products().delete(1).await.unwrap(), None);
}

#[tokio::test]
async fn duplicate_category_name_is_a_database_error() {
    let app = TestApp::new().await;
    app.categories().create(category("Oyuncak")).await.unwrap();
    let err = app
        .categories()
        .create(category("Oyuncak"))
        .await
        .unwrap_err();
    assert_matches!(err, ServiceError::DatabaseError(_));
}

#[tokio::test]
async fn dangling_category_reference_is_a_database_error() {
    let app = TestApp::new().await;
    let err = app
        .products()
        .create(product(json!({"name": "Kalem", "price": 3, "category_id": 99})))
        .await
        .unwrap_err();
    assert_matches!(err, ServiceError::DatabaseError(_));
}

#[tokio::test]
async fn product_values_are_persisted_with_defaults() {
    let app = TestApp::new().await;
    let cat = app.categories().create(category("Bakliyat")).await.unwrap();

    let created = app
        .products()
        .create(product(json!({
            "name": "Kırmızı Mercimek",
            "price": "34.2549",
            "discount_rate": "12.5",
            "category_id": cat.id
        })))
        .await
        .unwrap();

    let stored = app.products().get(created.id).await.unwrap().unwrap();
    assert_eq!(stored, created);
    assert_eq!(stored.price, dec!(34.25));
    assert_eq!(stored.discount_rate, dec!(12.5));
    assert_eq!(stored.final_price, None);
    assert_eq!(stored.stock, 0);
    assert_eq!(stored.unit, "adet");
    assert!(stored.is_active);
    assert!(!stored.is_featured);
    assert_eq!(stored.category_id, Some(cat.id));
    assert_eq!(stored.created_at, stored.updated_at);
}

#[tokio::test]
async fn rapid_updates_keep_updated_at_strictly_increasing() {
    let app = TestApp::new().await;
    let repo = app.products();
    let created = repo
        .create(product(json!({"name": "Pirinç", "price": 45})))
        .await
        .unwrap();

    let mut previous = created.updated_at;
    for i in 0..5 {
        let updated = repo
            .update(
                created.id,
                product(json!({"name": "Pirinç", "price": 45, "stock": i})),
            )
            .await
            .unwrap()
            .unwrap();
        assert!(updated.updated_at > previous);
        assert_eq!(updated.created_at, created.created_at);
        previous = updated.updated_at;
    }
}

#[tokio::test]
async fn category_delete_cascades_only_to_its_products() {
    let app = TestApp::new().await;
    let a = app.categories().create(category("A")).await.unwrap();
    let b = app.categories().create(category("B")).await.unwrap();

    for (name, cat) in [("a1", a.id), ("a2", a.id), ("b1", b.id)] {
        app.products()
            .create(product(json!({"name": name, "price": 1, "category_id": cat})))
            .await
            .unwrap();
    }

    assert!(app.categories().delete(a.id).await.unwrap().is_some());

    let names: Vec<String> = app
        .products()
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["b1".to_string()]);
    assert_eq!(app.categories().list().await.unwrap(), vec![b]);
}
