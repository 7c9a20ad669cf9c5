//! Status codes for inventory storage failures.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// A missing row is 404 and an unreachable database is 503. A merge refused
/// because the summed quantity would not be a finite number is 422, like any
/// other invalid input. Query and row decoding failures are 500.
///
/// # Examples
///
/// ```
/// use pantry_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::NotFound {
///     entity_type: "InventoryItem",
///     id: "42".to_string(),
/// };
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::Rejected(_) => 422,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::QueryFailed(_) | RepositoryError::Serialization(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::ValidationError;

    #[test]
    fn test_missing_item_is_404() {
        let error = RepositoryError::NotFound {
            entity_type: "InventoryItem",
            id: "404".to_string(),
        };
        assert_eq!(repository_error_to_status_code(&error), 404);
    }

    #[test]
    fn test_rejected_merge_is_422() {
        let error = RepositoryError::Rejected(ValidationError::NonFiniteQuantity);
        assert_eq!(repository_error_to_status_code(&error), 422);
    }

    #[test]
    fn test_locked_database_is_503() {
        let error = RepositoryError::ConnectionFailed("database is locked".to_string());
        assert_eq!(repository_error_to_status_code(&error), 503);
    }

    #[test]
    fn test_query_and_decode_failures_are_500() {
        let query = RepositoryError::QueryFailed("no such table: inventory".to_string());
        let decode = RepositoryError::Serialization("invalid added_date".to_string());

        assert_eq!(repository_error_to_status_code(&query), 500);
        assert_eq!(repository_error_to_status_code(&decode), 500);
    }
}
