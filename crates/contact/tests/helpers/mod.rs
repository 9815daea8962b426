#![allow(dead_code)]

use std::{
    path::PathBuf,
    str::FromStr,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use brightwave_contact::{ContactMessage, ContactStore};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};

/// Fake store that records every inserted message.
#[derive(Default)]
pub struct RecordingStore {
    pub inserted: Mutex<Vec<ContactMessage>>,
    pub calls: AtomicUsize,
}

#[async_trait]
impl ContactStore for RecordingStore {
    async fn insert_contact_message(
        &self,
        message: &ContactMessage,
    ) -> brightwave_shared::Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inserted.lock().unwrap().push(message.clone());

        Ok(())
    }
}

/// Fake store that always fails with the given error text.
pub struct FailingStore {
    pub error: String,
}

impl FailingStore {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[async_trait]
impl ContactStore for FailingStore {
    async fn insert_contact_message(
        &self,
        _message: &ContactMessage,
    ) -> brightwave_shared::Result<()> {
        Err(brightwave_shared::Error::Server(self.error.clone()))
    }
}

/// Fake store that accepts a fixed number of inserts, then fails every
/// subsequent one with the given error text.
pub struct FailAfterStore {
    successes_left: AtomicUsize,
    error: String,
}

impl FailAfterStore {
    pub fn new(successes: usize, error: impl Into<String>) -> Self {
        Self {
            successes_left: AtomicUsize::new(successes),
            error: error.into(),
        }
    }
}

#[async_trait]
impl ContactStore for FailAfterStore {
    async fn insert_contact_message(
        &self,
        _message: &ContactMessage,
    ) -> brightwave_shared::Result<()> {
        let left = self.successes_left.load(Ordering::SeqCst);
        if left == 0 {
            return Err(brightwave_shared::Error::Server(self.error.clone()));
        }

        self.successes_left.store(left - 1, Ordering::SeqCst);
        Ok(())
    }
}

pub async fn setup_test_pool(path: PathBuf) -> anyhow::Result<SqlitePool> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    sqlx::migrate!("../../migrations").run(&pool).await?;

    Ok(pool)
}

pub fn sample_message() -> ContactMessage {
    ContactMessage {
        name: "Amy".to_owned(),
        email: "a@x.com".to_owned(),
        country: "Senegal".to_owned(),
        message: "Hello".to_owned(),
    }
}
