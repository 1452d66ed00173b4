use shop_api::{
    db::{create_pool, run_migrations},
    dto::{
        cart::{CartItemKey, CartItemRequest},
        favorites::AddFavoriteRequest,
        products::ProductPayload,
    },
    models::FavoriteInsert,
    store::{PgStore, ShopStore},
};

// Integration flow against a real database: product -> cart upsert -> favorites -> cleanup.
#[tokio::test]
async fn cart_and_favorites_flow_against_postgres() -> anyhow::Result<()> {
    // Allow skipping when no DB is configured in the environment.
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run the Postgres flow test."
            );
            return Ok(());
        }
    };

    let store = setup_store(&database_url).await?;

    let product = store
        .create_product(&ProductPayload {
            name: "Test Widget".into(),
            description: Some("A product for testing".into()),
            price: 1000,
            stock: 10,
            image_url: None,
        })
        .await?;
    assert!(store
        .list_products()
        .await?
        .iter()
        .any(|p| p.product_id == product.product_id));

    let item = |quantity| CartItemRequest {
        user_id: 1,
        product_id: product.product_id,
        quantity,
    };
    store.add_to_cart(&item(2)).await?;
    let entry = store.add_to_cart(&item(3)).await?;
    assert_eq!(entry.quantity, 5);

    let lines = store.cart_for_user(1).await?;
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].quantity, 5);
    assert_eq!(lines[0].name, "Test Widget");

    assert!(store
        .set_cart_quantity(&CartItemRequest {
            user_id: 2,
            product_id: product.product_id,
            quantity: 1,
        })
        .await?
        .is_none());
    assert!(store.cart_for_user(2).await?.is_empty());

    let favorite = AddFavoriteRequest {
        user_id: 1,
        product_id: product.product_id,
    };
    assert_eq!(store.add_favorite(&favorite).await?, FavoriteInsert::Inserted);
    assert_eq!(
        store.add_favorite(&favorite).await?,
        FavoriteInsert::AlreadyExists
    );
    assert_eq!(store.favorites_for_user(1).await?.len(), 1);

    let key = CartItemKey {
        user_id: 1,
        product_id: product.product_id,
    };
    assert_eq!(store.remove_from_cart(&key).await?, 1);
    assert_eq!(store.remove_from_cart(&key).await?, 0);
    assert_eq!(store.clear_cart(1).await?, 0);

    assert_eq!(store.delete_product(product.product_id).await?, 1);
    assert_eq!(store.delete_product(product.product_id).await?, 0);
    // Favorites cascade with the product.
    assert!(store.favorites_for_user(1).await?.is_empty());

    Ok(())
}

async fn setup_store(database_url: &str) -> anyhow::Result<PgStore> {
    let pool = create_pool(database_url).await?;
    run_migrations(&pool).await?;

    // Clean tables between runs
    sqlx::query("TRUNCATE TABLE cart, favorites, product RESTART IDENTITY CASCADE")
        .execute(&pool)
        .await?;

    Ok(PgStore::new(pool))
}
