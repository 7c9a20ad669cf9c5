//! API request types for inventory operations.
//!
//! Deserialization only checks shape and types. Content rules live in
//! [`ItemPayload::validate`], which turns a raw payload into a [`NewItem`].

use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::types::NewItem;

/// Request body shared by the add and update endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPayload {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ItemPayload {
    /// Checks field content and normalizes casing.
    ///
    /// `name` and `unit` need at least one non-whitespace character and
    /// `quantity` must be finite.
    pub fn validate(&self) -> Result<NewItem, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyField("name"));
        }
        if self.unit.trim().is_empty() {
            return Err(ValidationError::EmptyField("unit"));
        }
        if !self.quantity.is_finite() {
            return Err(ValidationError::NonFiniteQuantity);
        }

        Ok(NewItem::new(
            &self.name,
            self.quantity,
            &self.unit,
            self.category.as_deref(),
        ))
    }
}
