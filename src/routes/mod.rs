use axum::Router;

use crate::state::AppState;

pub mod cart;
pub mod doc;
pub mod favorites;
pub mod health;
pub mod products;

// Build the resource router without binding state; it is provided by `app::build_app`.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/products", products::router())
        .nest("/cart", cart::router())
        .nest("/favorites", favorites::router())
}
