use anyhow::Result;
use sqlx::{PgPool, postgres::PgPoolOptions};

pub type DbPool = PgPool;

/// Create the shared Postgres pool; connections are checked out per statement.
pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new().connect(database_url).await?;
    Ok(pool)
}

/// Apply the SQL files bundled from `migrations/` in version order.
pub async fn run_migrations(pool: &DbPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
