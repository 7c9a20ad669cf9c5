use async_trait::async_trait;

use crate::inventory::{AddOutcome, InventoryItem, NewItem};

use super::Result;

/// Repository for inventory item operations.
///
/// Each call runs in its own storage session: it either commits as a whole or
/// leaves the store untouched.
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Merges into the first row whose name contains `item.name`
    /// (case-insensitive), or inserts a new row stamped with the current time.
    async fn add_item(&self, item: &NewItem) -> Result<AddOutcome>;

    /// Gets every item, ordered by id.
    async fn list_items(&self) -> Result<Vec<InventoryItem>>;

    /// Gets an item by its ID.
    async fn get_item(&self, id: i64) -> Result<Option<InventoryItem>>;

    /// Replaces all mutable fields of an existing item.
    ///
    /// Fails with `RepositoryError::NotFound` when no row has this ID.
    async fn update_item(&self, id: i64, item: &NewItem) -> Result<InventoryItem>;

    /// Deletes an item and returns the removed row.
    ///
    /// Fails with `RepositoryError::NotFound` when no row has this ID.
    async fn delete_item(&self, id: i64) -> Result<InventoryItem>;
}
