//! Web server startup

use anyhow::Result;
use brightwave_contact::{Gateway, SqliteContactStore};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::routes::AppState;

/// Start the web server
pub async fn serve(
    config: crate::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting brightwave server...");

    let host = host_override.unwrap_or(config.server.host.to_owned());
    let port = port_override.unwrap_or(config.server.port);

    let pool = crate::db::create_pool(&config.database.url, config.database.max_connections).await?;

    let state = AppState {
        contact_gateway: Gateway::new(SqliteContactStore::new(pool.clone())),
        pool,
    };

    let app = crate::routes::router(state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
