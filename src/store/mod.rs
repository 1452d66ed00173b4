use async_trait::async_trait;
use thiserror::Error;

use crate::{
    dto::{
        cart::{CartItemKey, CartItemRequest},
        favorites::AddFavoriteRequest,
        products::ProductPayload,
    },
    models::{CartEntry, CartLine, FavoriteInsert, FavoriteLine, Product},
};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("constraint violated: {0}")]
    Constraint(String),

    #[error("store unavailable: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Every method maps to exactly one statement against the backing store.
#[async_trait]
pub trait ShopStore: Send + Sync {
    async fn list_products(&self) -> StoreResult<Vec<Product>>;

    async fn create_product(&self, product: &ProductPayload) -> StoreResult<Product>;

    /// `None` when no product has `id`.
    async fn replace_product(
        &self,
        id: i32,
        product: &ProductPayload,
    ) -> StoreResult<Option<Product>>;

    /// Returns the number of deleted rows.
    async fn delete_product(&self, id: i32) -> StoreResult<u64>;

    async fn cart_for_user(&self, user_id: i32) -> StoreResult<Vec<CartLine>>;

    /// Inserts the entry or adds `quantity` to the existing one.
    async fn add_to_cart(&self, item: &CartItemRequest) -> StoreResult<CartEntry>;

    /// Overwrites the quantity; `None` when the pair is not in the cart.
    async fn set_cart_quantity(&self, item: &CartItemRequest) -> StoreResult<Option<CartEntry>>;

    async fn remove_from_cart(&self, key: &CartItemKey) -> StoreResult<u64>;

    async fn clear_cart(&self, user_id: i32) -> StoreResult<u64>;

    async fn favorites_for_user(&self, user_id: i32) -> StoreResult<Vec<FavoriteLine>>;

    async fn add_favorite(&self, favorite: &AddFavoriteRequest) -> StoreResult<FavoriteInsert>;
}
