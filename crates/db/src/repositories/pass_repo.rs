//! Repository for the `pass_edges` table.
//!
//! A disjoint mirror of like edges. Pass edges are never consulted by the
//! conversation gate.

use sqlx::PgPool;

use mutuals_core::types::DbId;

use crate::models::pass::PassEdge;

/// Column list for pass_edges queries.
const PASS_COLUMNS: &str = "id, passer_id, passed_id, created_at";

/// Provides operations on directed pass edges.
pub struct PassRepo;

impl PassRepo {
    /// Insert a pass edge, returning the created row.
    ///
    /// A duplicate `(passer_id, passed_id)` pair fails with a unique
    /// constraint violation.
    pub async fn create(
        pool: &PgPool,
        passer_id: DbId,
        passed_id: DbId,
    ) -> Result<PassEdge, sqlx::Error> {
        let query = format!(
            "INSERT INTO pass_edges (passer_id, passed_id)
             VALUES ($1, $2)
             RETURNING {PASS_COLUMNS}"
        );
        sqlx::query_as::<_, PassEdge>(&query)
            .bind(passer_id)
            .bind(passed_id)
            .fetch_one(pool)
            .await
    }

    /// Delete a pass edge. Returns `true` when a row was removed.
    pub async fn delete(
        pool: &PgPool,
        passer_id: DbId,
        passed_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pass_edges WHERE passer_id = $1 AND passed_id = $2")
            .bind(passer_id)
            .bind(passed_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
