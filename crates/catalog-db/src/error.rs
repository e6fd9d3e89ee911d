//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Adds context and categorization               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Screens map variants to UI states:                                    │
//! │    NotFound        → "not found" view                                  │
//! │    UniqueViolation → "ID already in use" field message                 │
//! │    everything else → generic save/load error                           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No variant is retried anywhere in this crate; transient failures are
//! surfaced immediately and retry policy belongs to the caller.

use thiserror::Error;

/// Database operation errors.
///
/// These errors wrap sqlx errors and provide additional context
/// for debugging and user feedback.
#[derive(Debug, Error)]
pub enum DbError {
    /// Product not found in database.
    ///
    /// ## When This Occurs
    /// - `get_by_id` matches zero rows
    #[error("Product not found: {id}")]
    NotFound { id: String },

    /// Primary-key collision on insert.
    ///
    /// ## When This Occurs
    /// - Inserting a product whose id already exists
    ///
    /// Kept distinct from [`DbError::QueryFailed`] so the Add screen can
    /// show "ID already in use" instead of a generic save error.
    #[error("Product id '{id}' already exists")]
    UniqueViolation { id: String },

    /// Database file cannot be opened.
    ///
    /// ## When This Occurs
    /// - File permissions issue
    /// - Disk full
    /// - Corruption detected at open time
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Schema creation failed for a reason other than pre-existence.
    ///
    /// ## When This Occurs
    /// - Invalid SQL in the embedded migration
    /// - Migration checksum conflict with an existing database
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Statement execution failed.
    ///
    /// ## When This Occurs
    /// - Engine-level I/O error mid-statement
    /// - Row decode failure
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given product id.
    pub fn not_found(id: impl Into<String>) -> Self {
        DbError::NotFound { id: id.into() }
    }

    /// Creates a UniqueViolation error for a given product id.
    pub fn duplicate(id: impl Into<String>) -> Self {
        DbError::UniqueViolation { id: id.into() }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound    → DbError::NotFound
/// sqlx::Error::Database       → Analyze message for constraint type
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// Other                       → DbError::Internal
/// ```
///
/// The id on a constraint violation is not recoverable from the engine
/// message alone, so the repository rebinds it at the call site where
/// the id is in hand.
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::NotFound {
                id: "unknown".to_string(),
            },

            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite reports a primary-key collision as
                // "UNIQUE constraint failed: Product.id"
                if msg.contains("UNIQUE constraint failed") {
                    DbError::UniqueViolation {
                        id: "unknown".to_string(),
                    }
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DbError::not_found("P1");
        assert_eq!(err.to_string(), "Product not found: P1");

        let err = DbError::duplicate("P1");
        assert_eq!(err.to_string(), "Product id 'P1' already exists");
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err: DbError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[test]
    fn test_pool_timeout_maps_to_exhausted() {
        let err: DbError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, DbError::PoolExhausted));
    }
}
