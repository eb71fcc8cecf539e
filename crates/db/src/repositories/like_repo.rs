//! Repository for the `like_edges` table.
//!
//! The `uq_like_edges_pair` uniqueness constraint is the concurrency
//! primitive for "exactly one edge per ordered pair": concurrent duplicate
//! inserts are sequenced by the database and the loser surfaces a 23505,
//! which the API layer classifies as a conflict.

use chrono::NaiveDate;
use sqlx::PgPool;

use mutuals_core::paging::{clamp_limit, clamp_offset};
use mutuals_core::types::DbId;

use crate::models::like::{LikeEdge, LikedProfile};

/// Column list for like_edges queries.
const LIKE_COLUMNS: &str = "id, liker_id, liked_id, created_at";

/// Provides operations on directed like edges.
pub struct LikeRepo;

impl LikeRepo {
    /// Insert a like edge, returning the created row.
    ///
    /// A duplicate `(liker_id, liked_id)` pair fails with a unique
    /// constraint violation; no other state changes occur.
    pub async fn create(
        pool: &PgPool,
        liker_id: DbId,
        liked_id: DbId,
    ) -> Result<LikeEdge, sqlx::Error> {
        let query = format!(
            "INSERT INTO like_edges (liker_id, liked_id)
             VALUES ($1, $2)
             RETURNING {LIKE_COLUMNS}"
        );
        sqlx::query_as::<_, LikeEdge>(&query)
            .bind(liker_id)
            .bind(liked_id)
            .fetch_one(pool)
            .await
    }

    /// Delete a like edge. Returns `true` when a row was removed.
    ///
    /// Deleting a like never re-locks an already-unlocked conversation;
    /// the unlock is monotonic.
    pub async fn delete(
        pool: &PgPool,
        liker_id: DbId,
        liked_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM like_edges WHERE liker_id = $1 AND liked_id = $2")
            .bind(liker_id)
            .bind(liked_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether the directed edge `liker_id -> liked_id` exists.
    pub async fn exists(
        pool: &PgPool,
        liker_id: DbId,
        liked_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM like_edges WHERE liker_id = $1 AND liked_id = $2)",
        )
        .bind(liker_id)
        .bind(liked_id)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }

    /// Whether both directions of a like exist between the two users.
    pub async fn mutual_exists(pool: &PgPool, a: DbId, b: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM like_edges WHERE liker_id = $1 AND liked_id = $2)
                AND EXISTS(SELECT 1 FROM like_edges WHERE liker_id = $2 AND liked_id = $1)",
        )
        .bind(a)
        .bind(b)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }

    /// Whether the user created at least one like edge during the given
    /// UTC calendar day. Precondition input for the daily-like bonus.
    pub async fn has_liked_on(
        pool: &PgPool,
        liker_id: DbId,
        day: NaiveDate,
    ) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(
                SELECT 1 FROM like_edges
                WHERE liker_id = $1
                  AND (created_at AT TIME ZONE 'UTC')::date = $2
             )",
        )
        .bind(liker_id)
        .bind(day)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }

    /// Page of profiles the user has liked, newest first, each annotated
    /// with the pair's conversation (if one exists) and whether the caller
    /// already sent their intro message there. Restartable via offset.
    pub async fn list_liked_profiles(
        pool: &PgPool,
        liker_id: DbId,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<LikedProfile>, sqlx::Error> {
        let limit = clamp_limit(limit);
        let offset = clamp_offset(offset);
        sqlx::query_as::<_, LikedProfile>(
            "SELECT
                l.liked_id,
                u.display_name,
                l.created_at AS liked_at,
                c.id AS conversation_id,
                c.is_locked,
                EXISTS(
                    SELECT 1 FROM messages m
                    WHERE m.conversation_id = c.id AND m.sender_id = $1
                ) AS has_intro
             FROM like_edges l
             JOIN users u ON u.id = l.liked_id
             LEFT JOIN conversations c
               ON c.user_low_id = LEAST(l.liker_id, l.liked_id)
              AND c.user_high_id = GREATEST(l.liker_id, l.liked_id)
             WHERE l.liker_id = $1
             ORDER BY l.created_at DESC
             LIMIT $2 OFFSET $3",
        )
        .bind(liker_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
    }
}
