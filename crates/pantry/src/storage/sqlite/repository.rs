//! SQLite repository implementation.
//!
//! Implements `InventoryRepository` from `pantry_core::storage` using SQLite.

use std::path::Path;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::Transaction;
use tokio_rusqlite::Connection;

use pantry_core::inventory::{
    find_merge_target, AddOutcome, InventoryItem, NewItem, ValidationError,
};
use pantry_core::storage::{InventoryRepository, RepositoryError, Result};

use super::conversions::{format_datetime, row_to_id_and_name, row_to_item};
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

const ENTITY: &str = "InventoryItem";

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// Owns a single connection that runs on a dedicated thread. Every repository
/// call is one session: a transaction that commits on success and rolls back
/// when dropped on any error path.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path.as_ref())
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Data is lost when the repository is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema. Safe to run on every start.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    /// Runs `f` inside a transaction.
    async fn in_session<F, R>(&self, f: F) -> std::result::Result<R, tokio_rusqlite::Error>
    where
        F: FnOnce(&Transaction<'_>) -> rusqlite::Result<R> + Send + 'static,
        R: Send + 'static,
    {
        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                let out = f(&tx).map_err(wrap_err)?;
                tx.commit().map_err(wrap_err)?;
                Ok(out)
            })
            .await
    }
}

/// Adds `item` to the first row whose name contains it, or inserts a new row.
///
/// A sum that is not a finite number is refused before anything is written.
fn merge_or_insert(
    tx: &Transaction<'_>,
    item: NewItem,
    added_date: DateTime<Utc>,
) -> rusqlite::Result<std::result::Result<AddOutcome, ValidationError>> {
    let rows: Vec<(i64, String)> = {
        let mut stmt = tx.prepare(schema::SELECT_ITEM_NAMES)?;
        let rows = stmt.query_map([], row_to_id_and_name)?;
        rows.collect::<rusqlite::Result<_>>()?
    };

    let target = find_merge_target(
        rows.iter().map(|(id, name)| (*id, name.as_str())),
        &item.name,
    );

    match target {
        Some(id) => {
            let mut existing = tx.query_row(schema::SELECT_ITEM_BY_ID, [id], row_to_item)?;
            if let Err(e) = existing.add_quantity(item.quantity) {
                return Ok(Err(e));
            }
            tx.execute(
                schema::UPDATE_ITEM_QUANTITY,
                rusqlite::params![id, existing.quantity],
            )?;
            Ok(Ok(AddOutcome::Merged(existing)))
        }
        None => {
            tx.execute(
                schema::INSERT_ITEM,
                rusqlite::params![
                    item.name,
                    item.quantity,
                    item.unit,
                    item.category,
                    format_datetime(&added_date)
                ],
            )?;
            let id = tx.last_insert_rowid();
            let created = InventoryItem::from_new(id, item, added_date);
            Ok(Ok(AddOutcome::Created(created)))
        }
    }
}

#[async_trait]
impl InventoryRepository for SqliteRepository {
    async fn add_item(&self, item: &NewItem) -> Result<AddOutcome> {
        let item = item.clone();
        let added_date = Utc::now();

        let outcome = self
            .in_session(move |tx| merge_or_insert(tx, item, added_date))
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY))?;

        outcome.map_err(RepositoryError::from)
    }

    async fn list_items(&self) -> Result<Vec<InventoryItem>> {
        self.in_session(|tx| {
            let mut stmt = tx.prepare(schema::SELECT_ALL_ITEMS)?;
            let rows = stmt.query_map([], row_to_item)?;

            let mut items = Vec::new();
            for row_result in rows {
                items.push(row_result?);
            }
            Ok(items)
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error(e, ENTITY))
    }

    async fn get_item(&self, id: i64) -> Result<Option<InventoryItem>> {
        self.in_session(move |tx| {
            match tx.query_row(schema::SELECT_ITEM_BY_ID, [id], row_to_item) {
                Ok(item) => Ok(Some(item)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error_with_id(e, ENTITY, id.to_string()))
    }

    async fn update_item(&self, id: i64, item: &NewItem) -> Result<InventoryItem> {
        let item = item.clone();

        self.in_session(move |tx| {
            let mut existing = tx.query_row(schema::SELECT_ITEM_BY_ID, [id], row_to_item)?;
            existing.apply_update(&item);
            tx.execute(
                schema::UPDATE_ITEM,
                rusqlite::params![
                    id,
                    existing.name,
                    existing.quantity,
                    existing.unit,
                    existing.category
                ],
            )?;
            Ok(existing)
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error_with_id(e, ENTITY, id.to_string()))
    }

    async fn delete_item(&self, id: i64) -> Result<InventoryItem> {
        self.in_session(move |tx| {
            let existing = tx.query_row(schema::SELECT_ITEM_BY_ID, [id], row_to_item)?;
            tx.execute(schema::DELETE_ITEM, [id])?;
            Ok(existing)
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error_with_id(e, ENTITY, id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_core::inventory::ItemPayload;

    async fn repo() -> SqliteRepository {
        SqliteRepository::new_in_memory().await.unwrap()
    }

    fn new_item(name: &str, quantity: f64, unit: &str, category: Option<&str>) -> NewItem {
        NewItem::new(name, quantity, unit, category)
    }

    #[tokio::test]
    async fn test_list_empty() {
        let repo = repo().await;
        assert!(repo.list_items().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_creates_row() {
        let repo = repo().await;
        let before = Utc::now();

        let outcome = repo
            .add_item(&new_item("milk", 1.0, "L", None))
            .await
            .unwrap();

        assert!(outcome.is_created());
        let item = outcome.into_item();
        assert_eq!(item.name, "Milk");
        assert_eq!(item.unit, "l");
        assert!(item.added_date >= before);

        let fetched = repo.get_item(item.id).await.unwrap().unwrap();
        assert_eq!(fetched, item);
    }

    #[tokio::test]
    async fn test_add_merges_case_insensitive_substring() {
        let repo = repo().await;
        let first = repo
            .add_item(&new_item("Almond Milk", 1.0, "l", Some("dairy")))
            .await
            .unwrap()
            .into_item();

        let outcome = repo
            .add_item(&new_item("MILK", 0.5, "ml", None))
            .await
            .unwrap();

        assert!(!outcome.is_created());
        let merged = outcome.into_item();
        assert_eq!(merged.id, first.id);
        assert_eq!(merged.quantity, 1.5);
        // Only quantity changes on merge.
        assert_eq!(merged.unit, "l");
        assert_eq!(merged.category.as_deref(), Some("dairy"));
        assert_eq!(merged.added_date, first.added_date);

        let items = repo.list_items().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 1.5);
    }

    #[tokio::test]
    async fn test_add_merges_into_lowest_id_of_several_matches() {
        let repo = repo().await;
        let almond = repo
            .add_item(&new_item("almond milk", 1.0, "l", None))
            .await
            .unwrap()
            .into_item();
        let oat = repo
            .add_item(&new_item("oat milk", 1.0, "l", None))
            .await
            .unwrap()
            .into_item();
        assert!(almond.id < oat.id);

        let merged = repo
            .add_item(&new_item("milk", 2.0, "l", None))
            .await
            .unwrap()
            .into_item();

        assert_eq!(merged.id, almond.id);
        assert_eq!(merged.quantity, 3.0);
        let oat_after = repo.get_item(oat.id).await.unwrap().unwrap();
        assert_eq!(oat_after.quantity, 1.0);
    }

    #[tokio::test]
    async fn test_add_overflowing_merge_is_rejected_and_keeps_row() {
        let repo = repo().await;
        let created = repo
            .add_item(&new_item("salt", 1e308, "g", None))
            .await
            .unwrap()
            .into_item();

        let err = repo
            .add_item(&new_item("salt", 1e308, "g", None))
            .await
            .unwrap_err();

        assert_eq!(err, RepositoryError::Rejected(ValidationError::NonFiniteQuantity));
        let stored = repo.get_item(created.id).await.unwrap().unwrap();
        assert_eq!(stored.quantity, 1e308);
        assert_eq!(repo.list_items().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_blank_category_is_stored_as_given() {
        let repo = repo().await;
        let payload = ItemPayload {
            name: "flour".to_string(),
            quantity: 1.0,
            unit: "kg".to_string(),
            category: Some(String::new()),
        };

        let created = repo
            .add_item(&payload.validate().unwrap())
            .await
            .unwrap()
            .into_item();

        let fetched = repo.get_item(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.category.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn test_add_longer_name_does_not_merge_into_shorter() {
        let repo = repo().await;
        repo.add_item(&new_item("milk", 1.0, "l", None))
            .await
            .unwrap();

        let outcome = repo
            .add_item(&new_item("almond milk", 1.0, "l", None))
            .await
            .unwrap();

        assert!(outcome.is_created());
        assert_eq!(repo.list_items().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let repo = repo().await;
        for name in ["eggs", "bread", "apples"] {
            repo.add_item(&new_item(name, 1.0, "pcs", None))
                .await
                .unwrap();
        }

        let names: Vec<String> = repo
            .list_items()
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.name)
            .collect();

        assert_eq!(names, vec!["Eggs", "Bread", "Apples"]);
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let repo = repo().await;
        assert_eq!(repo.get_item(99).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let repo = repo().await;
        let created = repo
            .add_item(&new_item("milk", 2.0, "l", Some("dairy")))
            .await
            .unwrap()
            .into_item();

        let updated = repo
            .update_item(created.id, &new_item("oat milk", 0.75, "ML", None))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Oat Milk");
        assert_eq!(updated.quantity, 0.75);
        assert_eq!(updated.unit, "ml");
        assert_eq!(updated.category, None);
        assert_eq!(updated.added_date, created.added_date);

        let fetched = repo.get_item(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = repo().await;

        let err = repo
            .update_item(5, &new_item("milk", 1.0, "l", None))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            RepositoryError::NotFound {
                entity_type: "InventoryItem",
                id: "5".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_delete_returns_removed_row() {
        let repo = repo().await;
        let created = repo
            .add_item(&new_item("bread", 1.0, "loaf", None))
            .await
            .unwrap()
            .into_item();

        let deleted = repo.delete_item(created.id).await.unwrap();

        assert_eq!(deleted, created);
        assert_eq!(repo.get_item(created.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found_and_keeps_rows() {
        let repo = repo().await;
        repo.add_item(&new_item("bread", 1.0, "loaf", None))
            .await
            .unwrap();

        let err = repo.delete_item(42).await.unwrap_err();

        assert!(matches!(err, RepositoryError::NotFound { .. }));
        assert_eq!(repo.list_items().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_file_database_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pantry.db");

        let created = {
            let repo = SqliteRepository::new(&path).await.unwrap();
            repo.add_item(&new_item("rice", 1.0, "kg", Some("grains")))
                .await
                .unwrap()
                .into_item()
        };

        // Schema creation runs again on reopen and must not touch existing rows.
        let repo = SqliteRepository::new(&path).await.unwrap();
        let items = repo.list_items().await.unwrap();

        assert_eq!(items, vec![created]);
    }
}
