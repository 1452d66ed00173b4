//! In-process [`ShopStore`] with the same row semantics as the Postgres schema:
//! serial ids, `(user_id, product_id)` uniqueness on cart and favorites, and
//! cascading deletes from products.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::{
    dto::{
        cart::{CartItemKey, CartItemRequest},
        favorites::AddFavoriteRequest,
        products::ProductPayload,
    },
    models::{CartEntry, CartLine, FavoriteInsert, FavoriteLine, Product},
    store::{ShopStore, StoreError, StoreResult},
};

#[derive(Debug, Clone)]
struct FavoriteRow {
    favorite_id: i32,
    user_id: i32,
    product_id: i32,
    added_at: chrono::DateTime<Utc>,
}

#[derive(Debug, Default)]
struct Tables {
    products: Vec<Product>,
    cart: Vec<CartEntry>,
    favorites: Vec<FavoriteRow>,
    next_product_id: i32,
    next_cart_id: i32,
    next_favorite_id: i32,
}

impl Tables {
    fn product(&self, product_id: i32) -> Option<&Product> {
        self.products.iter().find(|p| p.product_id == product_id)
    }

    fn require_product(&self, product_id: i32, table: &str) -> StoreResult<&Product> {
        self.product(product_id).ok_or_else(|| {
            StoreError::Constraint(format!("{table}_product_id_fkey ({product_id})"))
        })
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails, as a lost database connection would.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    async fn tables(&self) -> StoreResult<tokio::sync::MutexGuard<'_, Tables>> {
        if self.unavailable {
            return Err(StoreError::Backend("connection refused".to_string()));
        }
        Ok(self.tables.lock().await)
    }
}

#[async_trait]
impl ShopStore for MemoryStore {
    async fn list_products(&self) -> StoreResult<Vec<Product>> {
        Ok(self.tables().await?.products.clone())
    }

    async fn create_product(&self, product: &ProductPayload) -> StoreResult<Product> {
        let mut tables = self.tables().await?;
        tables.next_product_id += 1;
        let created = Product {
            product_id: tables.next_product_id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            stock: product.stock,
            image_url: product.image_url.clone(),
        };
        tables.products.push(created.clone());
        Ok(created)
    }

    async fn replace_product(
        &self,
        id: i32,
        product: &ProductPayload,
    ) -> StoreResult<Option<Product>> {
        let mut tables = self.tables().await?;
        let Some(existing) = tables.products.iter_mut().find(|p| p.product_id == id) else {
            return Ok(None);
        };
        existing.name = product.name.clone();
        existing.description = product.description.clone();
        existing.price = product.price;
        existing.stock = product.stock;
        existing.image_url = product.image_url.clone();
        Ok(Some(existing.clone()))
    }

    async fn delete_product(&self, id: i32) -> StoreResult<u64> {
        let mut tables = self.tables().await?;
        let before = tables.products.len();
        tables.products.retain(|p| p.product_id != id);
        let removed = (before - tables.products.len()) as u64;
        if removed > 0 {
            tables.cart.retain(|c| c.product_id != id);
            tables.favorites.retain(|f| f.product_id != id);
        }
        Ok(removed)
    }

    async fn cart_for_user(&self, user_id: i32) -> StoreResult<Vec<CartLine>> {
        let tables = self.tables().await?;
        let lines = tables
            .cart
            .iter()
            .filter(|c| c.user_id == user_id)
            .filter_map(|c| {
                tables.product(c.product_id).map(|p| CartLine {
                    cart_id: c.cart_id,
                    product_id: p.product_id,
                    name: p.name.clone(),
                    description: p.description.clone(),
                    price: p.price,
                    quantity: c.quantity,
                    image_url: p.image_url.clone(),
                    added_at: c.added_at,
                })
            })
            .collect();
        Ok(lines)
    }

    async fn add_to_cart(&self, item: &CartItemRequest) -> StoreResult<CartEntry> {
        let mut tables = self.tables().await?;
        tables.require_product(item.product_id, "cart")?;

        if let Some(existing) = tables
            .cart
            .iter_mut()
            .find(|c| c.user_id == item.user_id && c.product_id == item.product_id)
        {
            existing.quantity = existing
                .quantity
                .checked_add(item.quantity)
                .ok_or_else(|| StoreError::Constraint("integer out of range".into()))?;
            return Ok(existing.clone());
        }

        tables.next_cart_id += 1;
        let entry = CartEntry {
            cart_id: tables.next_cart_id,
            user_id: item.user_id,
            product_id: item.product_id,
            quantity: item.quantity,
            added_at: Utc::now(),
        };
        tables.cart.push(entry.clone());
        Ok(entry)
    }

    async fn set_cart_quantity(&self, item: &CartItemRequest) -> StoreResult<Option<CartEntry>> {
        let mut tables = self.tables().await?;
        Ok(tables
            .cart
            .iter_mut()
            .find(|c| c.user_id == item.user_id && c.product_id == item.product_id)
            .map(|entry| {
                entry.quantity = item.quantity;
                entry.clone()
            }))
    }

    async fn remove_from_cart(&self, key: &CartItemKey) -> StoreResult<u64> {
        let mut tables = self.tables().await?;
        let before = tables.cart.len();
        tables
            .cart
            .retain(|c| !(c.user_id == key.user_id && c.product_id == key.product_id));
        Ok((before - tables.cart.len()) as u64)
    }

    async fn clear_cart(&self, user_id: i32) -> StoreResult<u64> {
        let mut tables = self.tables().await?;
        let before = tables.cart.len();
        tables.cart.retain(|c| c.user_id != user_id);
        Ok((before - tables.cart.len()) as u64)
    }

    async fn favorites_for_user(&self, user_id: i32) -> StoreResult<Vec<FavoriteLine>> {
        let tables = self.tables().await?;
        let lines = tables
            .favorites
            .iter()
            .filter(|f| f.user_id == user_id)
            .filter_map(|f| {
                tables.product(f.product_id).map(|p| FavoriteLine {
                    favorite_id: f.favorite_id,
                    product_id: p.product_id,
                    name: p.name.clone(),
                    description: p.description.clone(),
                    price: p.price,
                    image_url: p.image_url.clone(),
                    added_at: f.added_at,
                })
            })
            .collect();
        Ok(lines)
    }

    async fn add_favorite(&self, favorite: &AddFavoriteRequest) -> StoreResult<FavoriteInsert> {
        let mut tables = self.tables().await?;
        tables.require_product(favorite.product_id, "favorites")?;

        let exists = tables
            .favorites
            .iter()
            .any(|f| f.user_id == favorite.user_id && f.product_id == favorite.product_id);
        if exists {
            return Ok(FavoriteInsert::AlreadyExists);
        }

        tables.next_favorite_id += 1;
        let row = FavoriteRow {
            favorite_id: tables.next_favorite_id,
            user_id: favorite.user_id,
            product_id: favorite.product_id,
            added_at: Utc::now(),
        };
        tables.favorites.push(row);
        Ok(FavoriteInsert::Inserted)
    }
}
