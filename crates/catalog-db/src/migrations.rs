//! # Schema-Ensure Migration
//!
//! Embedded SQL migration for the catalog database.
//!
//! ## How Schema-Ensure Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Schema-Ensure Process                              │
//! │                                                                         │
//! │  Database::new()                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Check _sqlx_migrations table                                          │
//! │       │                                                                 │
//! │       ├── Table doesn't exist? Create it                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  001_initial_schema.sql applied? ── yes ──► done                       │
//! │       │                                                                 │
//! │       no                                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CREATE TABLE IF NOT EXISTS Product (...) inside a transaction         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Record in _sqlx_migrations                                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Earlier versions of this store discovered a missing table by probing
//! with `SELECT 1 FROM Product LIMIT 1` and creating the table when the
//! probe failed, which misclassifies unrelated read errors as "table
//! missing". The migrator replaces that with an explicit idempotent step: the
//! `CREATE TABLE IF NOT EXISTS` statement runs exactly once per database
//! and is a no-op against a database that already has the table.

use sqlx::SqlitePool;
use tracing::info;

use crate::error::DbResult;

/// Embedded migrations from the `migrations/sqlite` directory.
///
/// The `sqlx::migrate!()` macro embeds the SQL files into the binary at
/// compile time. No runtime file access needed.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Runs the pending schema migration, if any.
///
/// ## Safety
/// - Idempotent: safe to run multiple times
/// - Transactional: the migration runs in a transaction
///
/// ## Example
/// ```rust,ignore
/// run_migrations(&pool).await?;
/// ```
pub async fn run_migrations(pool: &SqlitePool) -> DbResult<()> {
    info!("Ensuring catalog schema");

    MIGRATOR.run(pool).await?;

    info!("Catalog schema ready");
    Ok(())
}

/// Returns information about migrations.
///
/// ## Returns
/// Tuple of (total_migrations, applied_migrations)
///
/// ## Usage
/// For diagnostics and health checks.
pub async fn migration_status(pool: &SqlitePool) -> DbResult<(usize, usize)> {
    let total = MIGRATOR.migrations.len();

    let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
        .fetch_one(pool)
        .await
        .unwrap_or(0);

    Ok((total, applied as usize))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    #[tokio::test]
    async fn test_schema_ensure_is_idempotent() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        // Database::new already ran the migration; a second run is a no-op.
        run_migrations(db.pool()).await.unwrap();
        run_migrations(db.pool()).await.unwrap();

        let (total, applied) = migration_status(db.pool()).await.unwrap();
        assert_eq!(total, 1);
        assert_eq!(applied, 1);
    }
}
