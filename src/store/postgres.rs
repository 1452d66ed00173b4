use async_trait::async_trait;

use crate::{
    db::DbPool,
    dto::{
        cart::{CartItemKey, CartItemRequest},
        favorites::AddFavoriteRequest,
        products::ProductPayload,
    },
    models::{CartEntry, CartLine, FavoriteInsert, FavoriteLine, Product},
    store::{ShopStore, StoreResult},
};

#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShopStore for PgStore {
    async fn list_products(&self) -> StoreResult<Vec<Product>> {
        let items = sqlx::query_as::<_, Product>("SELECT * FROM product")
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    async fn create_product(&self, product: &ProductPayload) -> StoreResult<Product> {
        let created = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO product (name, description, price, stock, image_url)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.stock)
        .bind(&product.image_url)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn replace_product(
        &self,
        id: i32,
        product: &ProductPayload,
    ) -> StoreResult<Option<Product>> {
        let updated = sqlx::query_as::<_, Product>(
            r#"
            UPDATE product
            SET name = $1, description = $2, price = $3, stock = $4, image_url = $5
            WHERE product_id = $6
            RETURNING *
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.stock)
        .bind(&product.image_url)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(updated)
    }

    async fn delete_product(&self, id: i32) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM product WHERE product_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn cart_for_user(&self, user_id: i32) -> StoreResult<Vec<CartLine>> {
        let rows = sqlx::query_as::<_, CartLine>(
            r#"
            SELECT c.cart_id, p.product_id, p.name, p.description, p.price,
                   c.quantity, p.image_url, c.added_at
            FROM cart c
            JOIN product p ON c.product_id = p.product_id
            WHERE c.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn add_to_cart(&self, item: &CartItemRequest) -> StoreResult<CartEntry> {
        let entry = sqlx::query_as::<_, CartEntry>(
            r#"
            INSERT INTO cart (user_id, product_id, quantity)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, product_id)
            DO UPDATE SET quantity = cart.quantity + EXCLUDED.quantity
            RETURNING *
            "#,
        )
        .bind(item.user_id)
        .bind(item.product_id)
        .bind(item.quantity)
        .fetch_one(&self.pool)
        .await?;
        Ok(entry)
    }

    async fn set_cart_quantity(&self, item: &CartItemRequest) -> StoreResult<Option<CartEntry>> {
        let entry = sqlx::query_as::<_, CartEntry>(
            r#"
            UPDATE cart
            SET quantity = $1
            WHERE user_id = $2 AND product_id = $3
            RETURNING *
            "#,
        )
        .bind(item.quantity)
        .bind(item.user_id)
        .bind(item.product_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(entry)
    }

    async fn remove_from_cart(&self, key: &CartItemKey) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM cart WHERE user_id = $1 AND product_id = $2")
            .bind(key.user_id)
            .bind(key.product_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn clear_cart(&self, user_id: i32) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM cart WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn favorites_for_user(&self, user_id: i32) -> StoreResult<Vec<FavoriteLine>> {
        let rows = sqlx::query_as::<_, FavoriteLine>(
            r#"
            SELECT f.favorite_id, p.product_id, p.name, p.description, p.price,
                   p.image_url, f.added_at
            FROM favorites f
            JOIN product p ON f.product_id = p.product_id
            WHERE f.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn add_favorite(&self, favorite: &AddFavoriteRequest) -> StoreResult<FavoriteInsert> {
        let inserted: Option<(i32,)> = sqlx::query_as(
            r#"
            INSERT INTO favorites (user_id, product_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, product_id) DO NOTHING
            RETURNING favorite_id
            "#,
        )
        .bind(favorite.user_id)
        .bind(favorite.product_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(match inserted {
            Some(_) => FavoriteInsert::Inserted,
            None => FavoriteInsert::AlreadyExists,
        })
    }
}
