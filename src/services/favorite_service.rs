use crate::{
    dto::favorites::AddFavoriteRequest,
    error::{AppError, AppResult},
    models::{FavoriteInsert, FavoriteLine},
    response::MessageResponse,
    state::AppState,
};

const FETCH_FAILED: &str = "Ошибка при получении избранных товаров";
const ADD_FAILED: &str = "Ошибка при добавлении товара в избранное";
const FAVORITE_ADDED: &str = "Товар добавлен в избранное";
const ALREADY_FAVORITE: &str = "Товар уже в избранном";

pub async fn list_favorites(state: &AppState, user_id: i32) -> AppResult<Vec<FavoriteLine>> {
    state
        .store
        .favorites_for_user(user_id)
        .await
        .map_err(AppError::store(FETCH_FAILED))
}

pub async fn add_favorite(
    state: &AppState,
    payload: AddFavoriteRequest,
) -> AppResult<MessageResponse> {
    let outcome = state
        .store
        .add_favorite(&payload)
        .await
        .map_err(AppError::store(ADD_FAILED))?;

    match outcome {
        FavoriteInsert::Inserted => Ok(MessageResponse::new(FAVORITE_ADDED)),
        FavoriteInsert::AlreadyExists => {
            tracing::debug!(
                user_id = payload.user_id,
                product_id = payload.product_id,
                "favorite already present"
            );
            Err(AppError::BadRequest(ALREADY_FAVORITE.to_string()))
        }
    }
}
