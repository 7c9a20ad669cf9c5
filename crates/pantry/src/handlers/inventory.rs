//! Inventory CRUD handlers.
//!
//! Request bodies and path ids go through an explicit validation step before
//! any storage call, so malformed input never opens a storage session.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde::Serialize;

use pantry_core::inventory::{InventoryItem, ItemPayload, NewItem, ValidationError};
use pantry_core::storage::RepositoryError;

use crate::{handlers::AppError, state::AppState};

/// Body of a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// Turns the raw body extraction into a validated, normalized item.
fn validate_payload(
    payload: Result<Json<ItemPayload>, JsonRejection>,
) -> Result<NewItem, ValidationError> {
    let Json(payload) = payload.map_err(|e| ValidationError::Malformed(e.body_text()))?;
    payload.validate()
}

fn validate_id(id: Result<Path<i64>, PathRejection>) -> Result<i64, ValidationError> {
    id.map(|Path(id)| id)
        .map_err(|e| ValidationError::InvalidId(e.body_text()))
}

/// Add an item, merging into an existing row when the name matches
/// (POST /api/inventory/add).
///
/// Answers 201 when a row was inserted and 200 when an existing row absorbed
/// the quantity.
pub async fn add_item(
    State(state): State<AppState>,
    payload: Result<Json<ItemPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<InventoryItem>), AppError> {
    let item = validate_payload(payload)?;
    tracing::debug!(item = ?item, "Received add item request");

    let outcome = state.inventory_repo.add_item(&item).await?;
    let status = if outcome.is_created() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    let item = outcome.into_item();
    if status == StatusCode::CREATED {
        tracing::info!(item_id = item.id, name = %item.name, "Created inventory item");
    } else {
        tracing::info!(
            item_id = item.id,
            name = %item.name,
            quantity = item.quantity,
            "Merged quantity into existing item"
        );
    }

    Ok((status, Json(item)))
}

/// List all items (GET /api/inventory).
pub async fn list_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<InventoryItem>>, AppError> {
    let items = state.inventory_repo.list_items().await?;
    Ok(Json(items))
}

/// Get a single item by ID (GET /api/inventory/{id}).
pub async fn get_item(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<InventoryItem>, AppError> {
    let id = validate_id(id)?;

    match state.inventory_repo.get_item(id).await? {
        Some(item) => Ok(Json(item)),
        None => Err(RepositoryError::NotFound {
            entity_type: "InventoryItem",
            id: id.to_string(),
        }
        .into()),
    }
}

/// Replace an item's fields (PUT /api/inventory/{id}).
///
/// The submitted quantity replaces the stored one.
pub async fn update_item(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ItemPayload>, JsonRejection>,
) -> Result<Json<InventoryItem>, AppError> {
    let id = validate_id(id)?;
    let item = validate_payload(payload)?;
    tracing::debug!(item_id = id, item = ?item, "Received update item request");

    let updated = state.inventory_repo.update_item(id, &item).await?;

    tracing::info!(item_id = id, "Updated inventory item");

    Ok(Json(updated))
}

/// Delete an item by ID (DELETE /api/inventory/{id}).
pub async fn delete_item(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeleteResponse>, AppError> {
    let id = validate_id(id)?;

    let deleted = state.inventory_repo.delete_item(id).await?;

    tracing::info!(item_id = id, name = %deleted.name, "Deleted inventory item");

    Ok(Json(DeleteResponse {
        message: format!("Item '{}' deleted successfully", deleted.name),
    }))
}
