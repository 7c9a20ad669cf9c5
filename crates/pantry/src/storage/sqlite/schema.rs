//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL statement to create the inventory table.
pub const CREATE_TABLES: &str = r#"
-- Inventory table
CREATE TABLE IF NOT EXISTS inventory (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    quantity REAL NOT NULL,
    unit TEXT NOT NULL,
    category TEXT,
    added_date TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_inventory_name ON inventory(name);
"#;

pub const INSERT_ITEM: &str = r#"
INSERT INTO inventory (name, quantity, unit, category, added_date)
VALUES (?1, ?2, ?3, ?4, ?5)
"#;

pub const SELECT_ALL_ITEMS: &str = r#"
SELECT id, name, quantity, unit, category, added_date
FROM inventory
ORDER BY id ASC
"#;

pub const SELECT_ITEM_BY_ID: &str = r#"
SELECT id, name, quantity, unit, category, added_date
FROM inventory
WHERE id = ?1
"#;

/// Candidate rows for merge-on-add. Matching happens in Rust because SQLite's
/// `lower()` only folds ASCII.
pub const SELECT_ITEM_NAMES: &str = r#"
SELECT id, name
FROM inventory
"#;

pub const UPDATE_ITEM: &str = r#"
UPDATE inventory
SET name = ?2, quantity = ?3, unit = ?4, category = ?5
WHERE id = ?1
"#;

pub const UPDATE_ITEM_QUANTITY: &str = r#"
UPDATE inventory
SET quantity = ?2
WHERE id = ?1
"#;

pub const DELETE_ITEM: &str = r#"
DELETE FROM inventory
WHERE id = ?1
"#;
