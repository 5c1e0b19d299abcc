//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. The store handle is built once at startup and injected
//! here; handlers never reach for a global connection.

use std::sync::Arc;

use todolist_core::storage::ListRepository;

use crate::config::Config;
use crate::storage::SqliteRepository;

/// Shared application state.
///
/// Cloned for each request handler. The repository is the only shared
/// resource and is safe for concurrent use.
#[derive(Clone)]
pub struct AppState {
    /// List repository backed by the relational store.
    pub list_repo: Arc<dyn ListRepository>,
}

impl AppState {
    /// Creates AppState around an existing repository.
    pub fn from_repository(list_repo: Arc<dyn ListRepository>) -> Self {
        Self { list_repo }
    }

    /// Creates AppState with SQLite storage at the configured path.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let sqlite_repo = SqliteRepository::new(&config.sqlite_path).await?;

        tracing::info!(path = %config.sqlite_path, "Opened SQLite database");

        Ok(Self::from_repository(Arc::new(sqlite_repo)))
    }

    /// Creates AppState with an in-memory SQLite database.
    #[cfg(test)]
    pub async fn in_memory() -> Self {
        let sqlite_repo = SqliteRepository::new_in_memory()
            .await
            .expect("in-memory SQLite should open");
        Self::from_repository(Arc::new(sqlite_repo))
    }
}
