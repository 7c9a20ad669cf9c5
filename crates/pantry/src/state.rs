//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Storage is reached through a repository trait object
//! that is opened once at startup.

use std::sync::Arc;

use pantry_core::storage::InventoryRepository;

use crate::{
    config::{Config, DatabaseLocation},
    storage::SqliteRepository,
};

/// Shared application state.
///
/// Cloned for each request handler. Holds no request data of its own; every
/// request runs its own storage session through the repository.
#[derive(Clone)]
pub struct AppState {
    /// Inventory repository.
    pub inventory_repo: Arc<dyn InventoryRepository>,
}

impl AppState {
    /// Creates a new AppState around an existing repository.
    pub fn new(inventory_repo: Arc<dyn InventoryRepository>) -> Self {
        Self { inventory_repo }
    }

    /// Opens the configured database and initializes its schema.
    pub async fn from_config(config: &Config) -> Result<Self, anyhow::Error> {
        let repo = match &config.database {
            DatabaseLocation::File(path) => {
                tracing::info!(path = %path.display(), "Opening SQLite database");
                SqliteRepository::new(path).await?
            }
            DatabaseLocation::Memory => {
                tracing::warn!("Using in-memory SQLite database, data will not persist");
                SqliteRepository::new_in_memory().await?
            }
        };

        tracing::info!("Database initialized successfully");

        Ok(Self::new(Arc::new(repo)))
    }
}

// ============================================================================
// Test support
// ============================================================================

#[cfg(test)]
impl AppState {
    /// Creates an AppState backed by a fresh in-memory database.
    pub async fn in_memory() -> Self {
        let repo = SqliteRepository::new_in_memory()
            .await
            .expect("in-memory database should open");
        Self::new(Arc::new(repo))
    }
}
