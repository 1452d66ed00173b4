use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Product {
    pub product_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub stock: i32,
    pub image_url: Option<String>,
}

/// A raw `cart` row, as returned by the upsert and quantity update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CartEntry {
    pub cart_id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub added_at: DateTime<Utc>,
}

/// Cart entry joined with its product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CartLine {
    pub cart_id: i32,
    pub product_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub quantity: i32,
    pub image_url: Option<String>,
    pub added_at: DateTime<Utc>,
}

/// Favorite joined with its product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct FavoriteLine {
    pub favorite_id: i32,
    pub product_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub image_url: Option<String>,
    pub added_at: DateTime<Utc>,
}

/// Outcome of a conflict-aware favorite insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteInsert {
    Inserted,
    AlreadyExists,
}
