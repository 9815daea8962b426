use axum::{Router, response::IntoResponse, routing::get};
use brightwave_contact::{Gateway, SqliteContactStore};
use sqlx::SqlitePool;

use crate::template::{NotFoundTemplate, Template};

mod contact;
mod health;
mod index;

#[derive(Clone)]
pub struct AppState {
    pub contact_gateway: Gateway<SqliteContactStore>,
    pub pool: SqlitePool,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.render(NotFoundTemplate)
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints (no auth required)
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route("/", get(index::page))
        .route("/contact", get(contact::page).post(contact::action))
        .fallback(fallback)
        .with_state(app_state)
}
