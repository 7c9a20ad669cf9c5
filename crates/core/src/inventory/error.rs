use thiserror::Error;

/// Errors produced while validating an inventory request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field '{0}' must not be empty")]
    EmptyField(&'static str),
    #[error("Field 'quantity' must be a finite number")]
    NonFiniteQuantity,
    #[error("Invalid request body: {0}")]
    Malformed(String),
    #[error("Invalid item id: {0}")]
    InvalidId(String),
}
