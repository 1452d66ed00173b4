use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
};

use crate::{
    dto::products::ProductPayload,
    error::AppResult,
    models::Product,
    response::ErrorResponse,
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/{id}", put(replace_product).delete(delete_product))
        .route("/update/{id}", put(update_product))
}

#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "All products, in store order", body = Vec<Product>),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let items = product_service::list_products(&state).await?;
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/products",
    request_body = ProductPayload,
    responses(
        (status = 201, description = "Created product", body = Product),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = product_service::create_product(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Updated product", body = Product),
        (status = 404, description = "Product not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn replace_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ProductPayload>,
) -> AppResult<Json<Product>> {
    let product = product_service::replace_product(&state, id, payload).await?;
    Ok(Json(product))
}

/// Alias of `PUT /products/{id}` kept for existing clients.
#[utoipa::path(
    put,
    path = "/products/update/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Updated product", body = Product),
        (status = 404, description = "Product not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn update_product(
    state: State<AppState>,
    id: Path<i32>,
    payload: Json<ProductPayload>,
) -> AppResult<Json<Product>> {
    replace_product(state, id, payload).await
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Deleted, or never existed"),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    product_service::delete_product(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
