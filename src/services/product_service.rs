use crate::{
    dto::products::ProductPayload,
    error::{AppError, AppResult},
    models::Product,
    state::AppState,
};

const LIST_FAILED: &str = "Ошибка при получении данных из базы данных";
const CREATE_FAILED: &str = "Ошибка при добавлении продукта";
const UPDATE_FAILED: &str = "Ошибка при обновлении продукта";
const DELETE_FAILED: &str = "Ошибка при удалении продукта";
const PRODUCT_NOT_FOUND: &str = "Product not found";

pub async fn list_products(state: &AppState) -> AppResult<Vec<Product>> {
    state
        .store
        .list_products()
        .await
        .map_err(AppError::store(LIST_FAILED))
}

pub async fn create_product(state: &AppState, payload: ProductPayload) -> AppResult<Product> {
    let product = state
        .store
        .create_product(&payload)
        .await
        .map_err(AppError::store(CREATE_FAILED))?;
    tracing::debug!(product_id = product.product_id, "product created");
    Ok(product)
}

pub async fn replace_product(
    state: &AppState,
    id: i32,
    payload: ProductPayload,
) -> AppResult<Product> {
    let updated = state
        .store
        .replace_product(id, &payload)
        .await
        .map_err(AppError::store(UPDATE_FAILED))?;

    match updated {
        Some(product) => Ok(product),
        None => {
            tracing::debug!(product_id = id, "product to update not found");
            Err(AppError::NotFoundText(PRODUCT_NOT_FOUND.to_string()))
        }
    }
}

/// Deletes without checking that the product existed.
pub async fn delete_product(state: &AppState, id: i32) -> AppResult<()> {
    let deleted = state
        .store
        .delete_product(id)
        .await
        .map_err(AppError::store(DELETE_FAILED))?;
    tracing::debug!(product_id = id, deleted, "product delete");
    Ok(())
}
