use thiserror::Error;

use crate::inventory::ValidationError;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// A write was refused because its result would break an item rule.
    #[error(transparent)]
    Rejected(#[from] ValidationError),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
