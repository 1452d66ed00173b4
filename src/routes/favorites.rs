use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    dto::favorites::AddFavoriteRequest,
    error::AppResult,
    models::FavoriteLine,
    response::{ErrorResponse, MessageResponse},
    services::favorite_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(add_favorite))
        .route("/{user_id}", get(list_favorites))
}

#[utoipa::path(
    get,
    path = "/favorites/{user_id}",
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Favorite products", body = Vec<FavoriteLine>),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "Favorites"
)]
pub async fn list_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<Vec<FavoriteLine>>> {
    let items = favorite_service::list_favorites(&state, user_id).await?;
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/favorites",
    request_body = AddFavoriteRequest,
    responses(
        (status = 201, description = "Added to favorites", body = MessageResponse),
        (status = 400, description = "Already in favorites", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "Favorites"
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    Json(payload): Json<AddFavoriteRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let message = favorite_service::add_favorite(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(message)))
}
