use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::normalize::{lowercase, title_case};

/// A single row of the inventory table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: i64,
    pub name: String,
    /// Cumulative amount, expressed in `unit`.
    pub quantity: f64,
    pub unit: String,
    pub category: Option<String>,
    /// Set once when the row is inserted.
    pub added_date: DateTime<Utc>,
}

impl InventoryItem {
    /// Builds a stored item from validated fields and a system-assigned id.
    pub fn from_new(id: i64, item: NewItem, added_date: DateTime<Utc>) -> Self {
        Self {
            id,
            name: item.name,
            quantity: item.quantity,
            unit: item.unit,
            category: item.category,
            added_date,
        }
    }

    /// Overwrites every mutable field. `id` and `added_date` are kept.
    pub fn apply_update(&mut self, item: &NewItem) {
        self.name = item.name.clone();
        self.quantity = item.quantity;
        self.unit = item.unit.clone();
        self.category = item.category.clone();
    }

    /// Accumulates `amount` into the stored quantity.
    ///
    /// The quantity is left untouched when the sum is not a finite number.
    pub fn add_quantity(&mut self, amount: f64) -> Result<(), ValidationError> {
        let total = self.quantity + amount;
        if !total.is_finite() {
            return Err(ValidationError::NonFiniteQuantity);
        }

        self.quantity = total;
        Ok(())
    }
}

/// Normalized, validated fields for an insert or a full update.
///
/// The only way to build one is through [`NewItem::new`], so every value that
/// reaches storage has already been normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub category: Option<String>,
}

impl NewItem {
    /// Normalizes casing: title case for `name`, lowercase for `unit` and
    /// `category`.
    pub fn new(name: &str, quantity: f64, unit: &str, category: Option<&str>) -> Self {
        Self {
            name: title_case(name),
            quantity,
            unit: lowercase(unit),
            category: category.map(lowercase),
        }
    }
}

/// Result of the create-or-merge add operation.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    /// No existing row matched; a new row was inserted.
    Created(InventoryItem),
    /// An existing row matched and its quantity was increased.
    Merged(InventoryItem),
}

impl AddOutcome {
    pub fn into_item(self) -> InventoryItem {
        match self {
            AddOutcome::Created(item) | AddOutcome::Merged(item) => item,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, AddOutcome::Created(_))
    }
}
