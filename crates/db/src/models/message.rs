//! Message models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use mutuals_core::types::{DbId, Timestamp};

/// A row from the `messages` table.
///
/// `sender_id` is nullable: when the author's account is deleted the
/// message survives and renders as a placeholder identity.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Message {
    pub id: DbId,
    pub conversation_id: DbId,
    pub sender_id: Option<DbId>,
    pub content: String,
    pub created_at: Timestamp,
}

/// Request body for `POST /conversations/{id}/messages`.
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    pub content: String,
}

/// Request body for `POST /points/mark-intro-sent`.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkIntroSentRequest {
    pub conversation_id: DbId,
    pub content: String,
}
