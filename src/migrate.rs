//! Database migration commands

use anyhow::Result;
use sqlx::migrate::MigrateDatabase;

use crate::config::Config;

/// Run all database migrations, creating the database if needed
pub async fn migrate(config: &Config) -> Result<()> {
    tracing::info!("Running database migrations...");

    if !sqlx::Sqlite::database_exists(&config.database.url).await? {
        tracing::info!("Database does not exist, creating: {}", config.database.url);
        sqlx::Sqlite::create_database(&config.database.url).await?;
    }

    let pool = crate::db::create_pool(&config.database.url, 1).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    pool.close().await;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

/// Drop the database if it exists and recreate it with migrations
pub async fn reset(config: &Config) -> Result<()> {
    if sqlx::Sqlite::database_exists(&config.database.url).await? {
        tracing::warn!("Dropping existing database: {}", config.database.url);
        sqlx::Sqlite::drop_database(&config.database.url).await?;
    } else {
        tracing::info!("Database does not exist, nothing to drop");
    }

    migrate(config).await
}
