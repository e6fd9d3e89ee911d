//! # Product Repository
//!
//! Database operations for catalog products: the five calls the screens
//! are built on, each one self-contained unit of work.
//!
//! ## Operation ↔ Screen Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Who Calls What                                       │
//! │                                                                         │
//! │  List screen     ──► list_all()                                        │
//! │  Details screen  ──► get_by_id(id) / delete(id)                        │
//! │  Add screen      ──► insert(product)                                   │
//! │  Edit screen     ──► get_by_id(id), then update(id, product)           │
//! │                                                                         │
//! │  Every call acquires a pooled connection, executes one statement,      │
//! │  and releases the connection. Nothing is cached; every read            │
//! │  re-queries storage.                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Concurrent calls are not coordinated here: two inserts racing on the
//! same id are arbitrated by the primary-key constraint alone (one
//! succeeds, the other gets [`DbError::UniqueViolation`]).

use serde::Serialize;
use sqlx::sqlite::SqliteQueryResult;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use catalog_core::Product;

// =============================================================================
// Write Summary
// =============================================================================

/// Result descriptor for mutating operations (insert/update/delete).
///
/// `rows_affected` is the durable part of the contract: a zero-row
/// update or delete still resolves successfully, and callers that want
/// strict "not found" handling check the count instead of relying on an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteSummary {
    /// Number of rows the statement touched.
    pub rows_affected: u64,

    /// The engine's rowid of the last inserted row. Engine-dependent;
    /// not part of the durable contract.
    pub last_insert_rowid: i64,
}

impl From<SqliteQueryResult> for WriteSummary {
    fn from(result: SqliteQueryResult) -> Self {
        WriteSummary {
            rows_affected: result.rows_affected(),
            last_insert_rowid: result.last_insert_rowid(),
        }
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
///
/// let all = repo.list_all().await?;
/// let one = repo.get_by_id("P1").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Lists every product in the catalog.
    ///
    /// Full-table scan in the engine's natural row order (no ORDER BY);
    /// for a catalog this size the list screen sorts client-side if it
    /// wants to. An empty store resolves with an empty vec.
    pub async fn list_all(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, imageUri, price FROM Product",
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Gets a product by its id.
    ///
    /// ## Arguments
    /// * `id` - Caller-supplied product id
    ///
    /// ## Returns
    /// * `Ok(Product)` - Exactly one row matched
    /// * `Err(DbError::NotFound)` - Zero rows matched
    ///
    /// More than one row cannot match: `id` is the primary key.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Product> {
        debug!(id = %id, "Fetching product");

        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, imageUri, price FROM Product WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        product.ok_or_else(|| DbError::not_found(id))
    }

    /// Inserts a new product.
    ///
    /// ## Arguments
    /// * `product` - Product to insert; its `id` must be supplied by the
    ///   caller (the store never generates one)
    ///
    /// ## Returns
    /// * `Ok(WriteSummary)` - Inserted; `rows_affected` is 1
    /// * `Err(DbError::UniqueViolation)` - The id already exists
    pub async fn insert(&self, product: &Product) -> DbResult<WriteSummary> {
        debug!(id = %product.id, "Inserting product");

        let result = sqlx::query(
            "INSERT INTO Product (id, name, description, imageUri, price) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.image_uri)
        .bind(&product.price)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            // The engine message doesn't carry the colliding value, so
            // rebind the id here where it is in hand.
            match DbError::from(e) {
                DbError::UniqueViolation { .. } => DbError::duplicate(&product.id),
                other => other,
            }
        })?;

        Ok(WriteSummary::from(result))
    }

    /// Updates an existing product's mutable fields.
    ///
    /// The `id` column is never written: the row is addressed by the `id`
    /// argument, and the payload's own `id` field is ignored. A product
    /// cannot be re-keyed through this path.
    ///
    /// ## Arguments
    /// * `id` - Id of the row to update
    /// * `product` - New field values (`name`, `description`, `image_uri`,
    ///   `price`)
    ///
    /// ## Returns
    /// * `Ok(WriteSummary)` - `rows_affected` is 1 if the row existed,
    ///   0 if it didn't (a zero-row update is not an error)
    pub async fn update(&self, id: &str, product: &Product) -> DbResult<WriteSummary> {
        debug!(id = %id, "Updating product");

        let result = sqlx::query(
            "UPDATE Product SET name = ?1, description = ?2, imageUri = ?3, price = ?4 \
             WHERE id = ?5",
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.image_uri)
        .bind(&product.price)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(WriteSummary::from(result))
    }

    /// Deletes a product by its id.
    ///
    /// Idempotent: deleting an id that doesn't exist resolves with
    /// `rows_affected` 0 rather than an error.
    pub async fn delete(&self, id: &str) -> DbResult<WriteSummary> {
        debug!(id = %id, "Deleting product");

        let result = sqlx::query("DELETE FROM Product WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(WriteSummary::from(result))
    }

    /// Counts total products (for diagnostics and the seed tool).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Product")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn fresh_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn pen() -> Product {
        Product::new("P1", "Pen", "Blue pen", "", "1.50")
    }

    #[tokio::test]
    async fn test_insert_then_get_round_trips() {
        let db = fresh_db().await;
        let repo = db.products();

        let summary = repo.insert(&pen()).await.unwrap();
        assert_eq!(summary.rows_affected, 1);

        let fetched = repo.get_by_id("P1").await.unwrap();
        assert_eq!(fetched, pen());
    }

    #[tokio::test]
    async fn test_duplicate_insert_fails_and_preserves_original() {
        let db = fresh_db().await;
        let repo = db.products();

        repo.insert(&pen()).await.unwrap();

        let collision = Product::new("P1", "Pencil", "", "", "0.75");
        let err = repo.insert(&collision).await.unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { ref id } if id == "P1"));

        // The original row is unchanged
        let fetched = repo.get_by_id("P1").await.unwrap();
        assert_eq!(fetched.name, "Pen");
        assert_eq!(fetched.price, "1.50");
    }

    #[tokio::test]
    async fn test_get_missing_id_is_not_found() {
        let db = fresh_db().await;

        let err = db.products().get_by_id("nope").await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { ref id } if id == "nope"));
    }

    #[tokio::test]
    async fn test_update_replaces_fields_but_never_the_id() {
        let db = fresh_db().await;
        let repo = db.products();

        repo.insert(&pen()).await.unwrap();

        // Payload carries a different id; the row keeps its own.
        let replacement = Product::new("OTHER", "Gel Pen", "Black gel pen", "img://gel", "2.00");
        let summary = repo.update("P1", &replacement).await.unwrap();
        assert_eq!(summary.rows_affected, 1);

        let fetched = repo.get_by_id("P1").await.unwrap();
        assert_eq!(fetched.id, "P1");
        assert_eq!(fetched.name, "Gel Pen");
        assert_eq!(fetched.description, "Black gel pen");
        assert_eq!(fetched.image_uri, "img://gel");
        assert_eq!(fetched.price, "2.00");

        // Nothing was re-keyed to the payload's id
        let err = repo.get_by_id("OTHER").await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_of_missing_id_is_lenient() {
        let db = fresh_db().await;

        let summary = db.products().update("ghost", &pen()).await.unwrap();
        assert_eq!(summary.rows_affected, 0);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let db = fresh_db().await;
        let repo = db.products();

        repo.insert(&pen()).await.unwrap();

        let summary = repo.delete("P1").await.unwrap();
        assert_eq!(summary.rows_affected, 1);

        let err = repo.get_by_id("P1").await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { ref id } if id == "P1"));
    }

    #[tokio::test]
    async fn test_double_delete_is_idempotent() {
        let db = fresh_db().await;
        let repo = db.products();

        repo.insert(&pen()).await.unwrap();
        repo.delete("P1").await.unwrap();

        // Second delete does not error
        let summary = repo.delete("P1").await.unwrap();
        assert_eq!(summary.rows_affected, 0);

        assert!(repo.get_by_id("P1").await.is_err());
    }

    #[tokio::test]
    async fn test_list_all_set_equality() {
        let db = fresh_db().await;
        let repo = db.products();

        assert!(repo.list_all().await.unwrap().is_empty());

        let p1 = pen();
        let p2 = Product::new("P2", "Notebook", "A5 ruled", "img://nb", "3.25");
        let p3 = Product::new("P3", "Eraser", "", "", "0.40");
        repo.insert(&p1).await.unwrap();
        repo.insert(&p2).await.unwrap();
        repo.insert(&p3).await.unwrap();

        // Order is whatever the engine returns; assert set equality only
        let mut listed = repo.list_all().await.unwrap();
        listed.sort_by(|a, b| a.id.cmp(&b.id));
        assert_eq!(listed, vec![p1, p2, p3]);
    }

    #[tokio::test]
    async fn test_count_tracks_inserts_and_deletes() {
        let db = fresh_db().await;
        let repo = db.products();

        assert_eq!(repo.count().await.unwrap(), 0);
        repo.insert(&pen()).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);
        repo.delete("P1").await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_full_lifecycle_scenario() {
        let db = fresh_db().await;
        let repo = db.products();

        repo.insert(&pen()).await.unwrap();

        let listed = repo.list_all().await.unwrap();
        assert_eq!(listed, vec![pen()]);

        let mut updated = pen();
        updated.price = "2.00".to_string();
        repo.update("P1", &updated).await.unwrap();
        assert_eq!(repo.get_by_id("P1").await.unwrap().price, "2.00");

        repo.delete("P1").await.unwrap();
        assert!(repo.list_all().await.unwrap().is_empty());
    }
}
