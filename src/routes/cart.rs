use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    dto::cart::{CartItemKey, CartItemRequest},
    error::AppResult,
    models::{CartEntry, CartLine},
    response::{ErrorResponse, MessageResponse},
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(add_to_cart)
                .put(update_quantity)
                .delete(remove_from_cart),
        )
        .route("/{user_id}", get(cart_list).delete(clear_cart))
}

#[utoipa::path(
    get,
    path = "/cart/{user_id}",
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Cart items joined with their products", body = Vec<CartLine>),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "Cart"
)]
pub async fn cart_list(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<Vec<CartLine>>> {
    let items = cart_service::list_cart(&state, user_id).await?;
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/cart",
    request_body = CartItemRequest,
    responses(
        (status = 201, description = "Inserted, or quantity added to the existing entry", body = CartEntry),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    Json(payload): Json<CartItemRequest>,
) -> AppResult<(StatusCode, Json<CartEntry>)> {
    let entry = cart_service::add_to_cart(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

#[utoipa::path(
    put,
    path = "/cart",
    request_body = CartItemRequest,
    responses(
        (status = 200, description = "Quantity replaced", body = CartEntry),
        (status = 404, description = "Item not in cart", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "Cart"
)]
pub async fn update_quantity(
    State(state): State<AppState>,
    Json(payload): Json<CartItemRequest>,
) -> AppResult<Json<CartEntry>> {
    let entry = cart_service::update_quantity(&state, payload).await?;
    Ok(Json(entry))
}

#[utoipa::path(
    delete,
    path = "/cart",
    request_body = CartItemKey,
    responses(
        (status = 200, description = "Item removed", body = MessageResponse),
        (status = 404, description = "Item not in cart", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Json(key): Json<CartItemKey>,
) -> AppResult<Json<MessageResponse>> {
    let message = cart_service::remove_from_cart(&state, key).await?;
    Ok(Json(message))
}

#[utoipa::path(
    delete,
    path = "/cart/{user_id}",
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Cart cleared, even if it was empty", body = MessageResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "Cart"
)]
pub async fn clear_cart(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    let message = cart_service::clear_cart(&state, user_id).await?;
    Ok(Json(message))
}
