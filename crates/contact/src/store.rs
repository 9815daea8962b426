use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::ContactMessage;

/// Persistence boundary for contact messages.
///
/// The gateway and form controller only ever talk to this trait, so tests can
/// swap in a fake without a database connection.
#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn insert_contact_message(
        &self,
        message: &ContactMessage,
    ) -> brightwave_shared::Result<()>;
}

#[async_trait]
impl<S: ContactStore + ?Sized> ContactStore for std::sync::Arc<S> {
    async fn insert_contact_message(
        &self,
        message: &ContactMessage,
    ) -> brightwave_shared::Result<()> {
        (**self).insert_contact_message(message).await
    }
}

/// Inserts contact messages into the `contact_messages` table.
#[derive(Clone)]
pub struct SqliteContactStore {
    pool: SqlitePool,
}

impl SqliteContactStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactStore for SqliteContactStore {
    async fn insert_contact_message(
        &self,
        message: &ContactMessage,
    ) -> brightwave_shared::Result<()> {
        sqlx::query(
            "INSERT INTO contact_messages (name, email, country, message) VALUES (?, ?, ?, ?)",
        )
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.country)
        .bind(&message.message)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
