pub mod config;
pub mod db;
pub mod language;
pub mod migrate;
pub mod observability;
pub mod routes;
pub mod server;
pub mod template;

pub use routes::AppState;

rust_i18n::i18n!("locales", fallback = "en");

/// Create the app router for testing
///
/// Builds the Axum router with all routes configured against the given pool,
/// useful for integration testing without starting the full server.
pub async fn create_app(pool: sqlx::SqlitePool) -> anyhow::Result<axum::Router> {
    use brightwave_contact::{Gateway, SqliteContactStore};

    let state = AppState {
        contact_gateway: Gateway::new(SqliteContactStore::new(pool.clone())),
        pool,
    };

    Ok(routes::router(state))
}
