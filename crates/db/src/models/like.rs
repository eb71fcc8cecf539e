//! Like edge models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use mutuals_core::types::{DbId, Timestamp};

/// A row from the `like_edges` table: a one-way expression of interest.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LikeEdge {
    pub id: DbId,
    pub liker_id: DbId,
    pub liked_id: DbId,
    pub created_at: Timestamp,
}

/// Request body for `POST /likes`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLikeRequest {
    pub liked_id: DbId,
}

/// One entry of a user's outgoing-likes listing: the liked profile joined
/// with the pair's conversation (if any) and whether the caller has already
/// sent their gated intro message there.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LikedProfile {
    pub liked_id: DbId,
    pub display_name: String,
    pub liked_at: Timestamp,
    pub conversation_id: Option<DbId>,
    pub is_locked: Option<bool>,
    pub has_intro: bool,
}
