//! Repository for the `messages` table.

use sqlx::PgPool;

use mutuals_core::paging::{clamp_limit, clamp_offset};
use mutuals_core::types::DbId;

use crate::models::message::Message;

/// Column list for messages queries.
const MESSAGE_COLUMNS: &str = "id, conversation_id, sender_id, content, created_at";

/// Provides operations on conversation messages.
pub struct MessageRepo;

impl MessageRepo {
    /// Insert a message, returning the created row.
    pub async fn create(
        pool: &PgPool,
        conversation_id: DbId,
        sender_id: DbId,
        content: &str,
    ) -> Result<Message, sqlx::Error> {
        let query = format!(
            "INSERT INTO messages (conversation_id, sender_id, content)
             VALUES ($1, $2, $3)
             RETURNING {MESSAGE_COLUMNS}"
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(conversation_id)
            .bind(sender_id)
            .bind(content)
            .fetch_one(pool)
            .await
    }

    /// Insert the single intro message of a locked conversation.
    ///
    /// Competing senders serialize on the conversation row lock, and the
    /// emptiness check runs after the lock is acquired, so of any number
    /// of concurrent intro sends exactly one insert lands. Returns `None`
    /// when the conversation already holds a message.
    pub async fn create_intro(
        pool: &PgPool,
        conversation_id: DbId,
        sender_id: DbId,
        content: &str,
    ) -> Result<Option<Message>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("SELECT id FROM conversations WHERE id = $1 FOR UPDATE")
            .bind(conversation_id)
            .execute(&mut *tx)
            .await?;

        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM messages WHERE conversation_id = $1")
                .bind(conversation_id)
                .fetch_one(&mut *tx)
                .await?;
        if count > 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        let query = format!(
            "INSERT INTO messages (conversation_id, sender_id, content)
             VALUES ($1, $2, $3)
             RETURNING {MESSAGE_COLUMNS}"
        );
        let message = sqlx::query_as::<_, Message>(&query)
            .bind(conversation_id)
            .bind(sender_id)
            .bind(content)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(message))
    }

    /// Page of messages in a conversation, oldest first.
    pub async fn list_for_conversation(
        pool: &PgPool,
        conversation_id: DbId,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Message>, sqlx::Error> {
        let limit = clamp_limit(limit);
        let offset = clamp_offset(offset);
        let query = format!(
            "SELECT {MESSAGE_COLUMNS} FROM messages
             WHERE conversation_id = $1
             ORDER BY created_at ASC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(conversation_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
