use shop_api::{
    config::AppConfig,
    db::{DbPool, create_pool, run_migrations},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&pool).await?;

    seed_products(&pool).await?;

    println!("Seed completed");
    Ok(())
}

async fn seed_products(pool: &DbPool) -> anyhow::Result<()> {
    let products = vec![
        ("Ferris Mug", "Coffee tastes better with Ferris", 1200_i64, 100, "/images/mug.png"),
        ("Rust Hoodie", "Warm hoodie for Rustaceans", 5500, 50, "/images/hoodie.png"),
        ("Sticker Pack", "Decorate your laptop", 500, 200, "/images/stickers.png"),
    ];

    let mut inserted = 0;
    for (name, desc, price, stock, image_url) in products {
        // product has no unique name constraint, so skip rows that are already present.
        let result = sqlx::query(
            r#"
            INSERT INTO product (name, description, price, stock, image_url)
            SELECT $1, $2, $3, $4, $5
            WHERE NOT EXISTS (SELECT 1 FROM product WHERE name = $1)
            "#,
        )
        .bind(name)
        .bind(desc)
        .bind(price)
        .bind(stock)
        .bind(image_url)
        .execute(pool)
        .await?;
        inserted += result.rows_affected();
    }

    println!("Seeded {inserted} products");
    Ok(())
}
