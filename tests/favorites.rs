mod common;

use axum::http::StatusCode;
use serde_json::json;
use shop_api::{app::build_app, state::AppState, store::MemoryStore};

use common::{memory_app, send};

#[tokio::test]
async fn second_add_is_rejected_and_one_row_remains() {
    let app = memory_app();
    let product = send(
        &app,
        "POST",
        "/products",
        Some(json!({ "name": "Mug", "price": 1200, "stock": 3, "image_url": "/m.png" })),
    )
    .await
    .json();
    let product_id = product["product_id"].as_i64().unwrap();
    let favorite = json!({ "user_id": 4, "product_id": product_id });

    let first = send(&app, "POST", "/favorites", Some(favorite.clone())).await;
    assert_eq!(first.status, StatusCode::CREATED);
    assert_eq!(first.json(), json!({ "message": "Товар добавлен в избранное" }));

    let second = send(&app, "POST", "/favorites", Some(favorite)).await;
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert_eq!(second.json(), json!({ "error": "Товар уже в избранном" }));

    let listed = send(&app, "GET", "/favorites/4", None).await;
    assert_eq!(listed.status, StatusCode::OK);
    let listed = listed.json();
    let rows = listed.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["product_id"].as_i64(), Some(product_id));
    assert_eq!(rows[0]["name"], "Mug");
    assert_eq!(rows[0]["image_url"], "/m.png");
    assert!(rows[0]["favorite_id"].is_number());
    assert!(rows[0].get("quantity").is_none());
}

#[tokio::test]
async fn unknown_user_has_no_favorites() {
    let app = memory_app();
    let response = send(&app, "GET", "/favorites/77", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!([]));
}

#[tokio::test]
async fn store_failures_map_to_fixed_messages() {
    let app = build_app(AppState::new(MemoryStore::unavailable()));

    let list = send(&app, "GET", "/favorites/1", None).await;
    assert_eq!(list.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(list.json()["error"], "Ошибка при получении избранных товаров");

    let add = send(
        &app,
        "POST",
        "/favorites",
        Some(json!({ "user_id": 1, "product_id": 1 })),
    )
    .await;
    assert_eq!(add.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(add.json()["error"], "Ошибка при добавлении товара в избранное");
}
