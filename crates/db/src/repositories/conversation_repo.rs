//! Repository for the `conversations` table: the conversation gate.
//!
//! The lock state machine per unordered pair is
//! Unmatched (no row) → Locked (`is_locked = TRUE`) → Unlocked (terminal).
//! Both transitions are pushed down to the database:
//!
//! - Creation races resolve through `INSERT ... ON CONFLICT DO NOTHING`
//!   plus a re-fetch; whichever writer's row lands is authoritative.
//! - The unlock is a conditional `UPDATE ... WHERE is_locked = TRUE`.
//!   Of any number of concurrent callers, exactly one observes
//!   `rows_affected = 1`; the rest see a benign no-op and the shared
//!   post-condition `is_locked = FALSE`.

use sqlx::PgPool;

use mutuals_core::pairing::canonical_pair;
use mutuals_core::types::DbId;

use crate::models::conversation::{Conversation, EnsureOutcome};
use crate::repositories::LikeRepo;

/// Column list for conversations queries.
const CONVERSATION_COLUMNS: &str =
    "id, user_low_id, user_high_id, is_locked, created_at, updated_at";

/// Provides operations on the per-pair conversation rows.
pub struct ConversationRepo;

impl ConversationRepo {
    /// Find a conversation by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Conversation>, sqlx::Error> {
        let query = format!("SELECT {CONVERSATION_COLUMNS} FROM conversations WHERE id = $1");
        sqlx::query_as::<_, Conversation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the conversation for a canonically ordered pair.
    pub async fn find_by_pair(
        pool: &PgPool,
        user_low_id: DbId,
        user_high_id: DbId,
    ) -> Result<Option<Conversation>, sqlx::Error> {
        let query = format!(
            "SELECT {CONVERSATION_COLUMNS} FROM conversations
             WHERE user_low_id = $1 AND user_high_id = $2"
        );
        sqlx::query_as::<_, Conversation>(&query)
            .bind(user_low_id)
            .bind(user_high_id)
            .fetch_optional(pool)
            .await
    }

    /// List all conversations the user participates in, most recently
    /// updated first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Conversation>, sqlx::Error> {
        let query = format!(
            "SELECT {CONVERSATION_COLUMNS} FROM conversations
             WHERE user_low_id = $1 OR user_high_id = $1
             ORDER BY updated_at DESC"
        );
        sqlx::query_as::<_, Conversation>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Attempt to create a locked conversation for a canonically ordered
    /// pair. Returns `None` when a concurrent creator already inserted the
    /// row -- the caller should re-fetch and treat that row as
    /// authoritative, not as an error.
    pub async fn insert_locked(
        pool: &PgPool,
        user_low_id: DbId,
        user_high_id: DbId,
    ) -> Result<Option<Conversation>, sqlx::Error> {
        let query = format!(
            "INSERT INTO conversations (user_low_id, user_high_id)
             VALUES ($1, $2)
             ON CONFLICT (user_low_id, user_high_id) DO NOTHING
             RETURNING {CONVERSATION_COLUMNS}"
        );
        sqlx::query_as::<_, Conversation>(&query)
            .bind(user_low_id)
            .bind(user_high_id)
            .fetch_optional(pool)
            .await
    }

    /// Conditionally flip a conversation to unlocked.
    ///
    /// Returns `true` only for the single caller whose update matched the
    /// `is_locked = TRUE` guard; `false` means another writer already
    /// unlocked it, which is a benign no-op.
    pub async fn unlock(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE conversations
             SET is_locked = FALSE, updated_at = NOW()
             WHERE id = $1 AND is_locked = TRUE",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Ensure a conversation exists for the pair touched by a new like and
    /// re-evaluate its lock state.
    ///
    /// This is the eager half of the gate, invoked after every successful
    /// like insert. Arrival order of the two directional likes does not
    /// matter: both callers run the same routine and the conditional
    /// unlock picks exactly one winner.
    pub async fn ensure_for_like(
        pool: &PgPool,
        liker_id: DbId,
        liked_id: DbId,
    ) -> Result<EnsureOutcome, sqlx::Error> {
        let (low, high) = canonical_pair(liker_id, liked_id);

        let conversation = match Self::insert_locked(pool, low, high).await? {
            Some(created) => created,
            // Lost the creation race; the concurrent writer's row wins.
            None => Self::find_by_pair(pool, low, high)
                .await?
                .ok_or(sqlx::Error::RowNotFound)?,
        };

        if !conversation.is_locked {
            return Ok(EnsureOutcome {
                conversation,
                unlocked_now: false,
            });
        }

        // Unlock only once the reciprocal edge exists.
        if !LikeRepo::exists(pool, liked_id, liker_id).await? {
            return Ok(EnsureOutcome {
                conversation,
                unlocked_now: false,
            });
        }

        let unlocked_now = Self::unlock(pool, conversation.id).await?;
        let conversation = Self::find_by_id(pool, conversation.id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;

        Ok(EnsureOutcome {
            conversation,
            unlocked_now,
        })
    }

    /// Fetch a conversation, lazily repairing a missed unlock.
    ///
    /// The eager unlock in [`ensure_for_like`](Self::ensure_for_like) can
    /// be lost to a crash between the like insert and the conditional
    /// update, so every lock-state read reconciles: if the row is still
    /// locked but both directional edges exist, run the same conditional
    /// unlock before returning. Locked conversations are pre-match and
    /// low-traffic, so the extra existence check is cheap.
    pub async fn find_reconciled(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Conversation>, sqlx::Error> {
        let Some(conversation) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        Self::reconcile(pool, conversation).await.map(Some)
    }

    /// Apply the repair-on-read policy to an already-fetched row.
    pub async fn reconcile(
        pool: &PgPool,
        conversation: Conversation,
    ) -> Result<Conversation, sqlx::Error> {
        if !conversation.is_locked {
            return Ok(conversation);
        }
        if !LikeRepo::mutual_exists(pool, conversation.user_low_id, conversation.user_high_id)
            .await?
        {
            return Ok(conversation);
        }

        let repaired = Self::unlock(pool, conversation.id).await?;
        if repaired {
            tracing::info!(
                conversation_id = conversation.id,
                "Repaired missed unlock on read"
            );
        }

        Self::find_by_id(pool, conversation.id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }
}
