use crate::{
    dto::cart::{CartItemKey, CartItemRequest},
    error::{AppError, AppResult},
    models::{CartEntry, CartLine},
    response::MessageResponse,
    state::AppState,
};

const FETCH_FAILED: &str = "Ошибка при получении корзины";
const ADD_FAILED: &str = "Ошибка при добавлении товара в корзину";
const UPDATE_FAILED: &str = "Ошибка при обновлении количества товара";
const REMOVE_FAILED: &str = "Ошибка при удалении товара из корзины";
const CLEAR_FAILED: &str = "Ошибка при очистке корзины";
const ITEM_NOT_FOUND: &str = "Товар не найден в корзине";
const ITEM_REMOVED: &str = "Товар удален из корзины";
const CART_CLEARED: &str = "Корзина очищена";

pub async fn list_cart(state: &AppState, user_id: i32) -> AppResult<Vec<CartLine>> {
    state
        .store
        .cart_for_user(user_id)
        .await
        .map_err(AppError::store(FETCH_FAILED))
}

/// Adds to the quantity already in the cart, if any.
pub async fn add_to_cart(state: &AppState, payload: CartItemRequest) -> AppResult<CartEntry> {
    let entry = state
        .store
        .add_to_cart(&payload)
        .await
        .map_err(AppError::store(ADD_FAILED))?;
    tracing::debug!(
        user_id = entry.user_id,
        product_id = entry.product_id,
        quantity = entry.quantity,
        "cart item upserted"
    );
    Ok(entry)
}

pub async fn update_quantity(state: &AppState, payload: CartItemRequest) -> AppResult<CartEntry> {
    let updated = state
        .store
        .set_cart_quantity(&payload)
        .await
        .map_err(AppError::store(UPDATE_FAILED))?;

    updated.ok_or_else(|| {
        tracing::debug!(
            user_id = payload.user_id,
            product_id = payload.product_id,
            "cart item to update not found"
        );
        AppError::NotFound(ITEM_NOT_FOUND.to_string())
    })
}

pub async fn remove_from_cart(state: &AppState, key: CartItemKey) -> AppResult<MessageResponse> {
    let removed = state
        .store
        .remove_from_cart(&key)
        .await
        .map_err(AppError::store(REMOVE_FAILED))?;

    if removed == 0 {
        return Err(AppError::NotFound(ITEM_NOT_FOUND.to_string()));
    }

    Ok(MessageResponse::new(ITEM_REMOVED))
}

/// Succeeds even when the cart was already empty.
pub async fn clear_cart(state: &AppState, user_id: i32) -> AppResult<MessageResponse> {
    let removed = state
        .store
        .clear_cart(user_id)
        .await
        .map_err(AppError::store(CLEAR_FAILED))?;
    tracing::debug!(user_id, removed, "cart cleared");
    Ok(MessageResponse::new(CART_CLEARED))
}
