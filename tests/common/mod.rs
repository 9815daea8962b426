use axum::Router;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

/// In-memory database with migrations applied.
///
/// Single connection so every query sees the same :memory: database.
pub async fn setup_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run migrations");

    pool
}

pub async fn create_test_app(pool: SqlitePool) -> Router {
    brightwave::create_app(pool)
        .await
        .expect("failed to create app")
}
