//! Conversation models.
//!
//! A conversation row is the canonical identity for an unordered user pair:
//! participants are stored as `(user_low_id, user_high_id)` with
//! `user_low_id < user_high_id`, so the pair uniqueness constraint holds on
//! a single ordered key.

use serde::Serialize;
use sqlx::FromRow;

use mutuals_core::types::{DbId, Timestamp};

/// A row from the `conversations` table.
///
/// `is_locked` starts `true` and transitions to `false` at most once
/// (monotonic unlock); it never goes back.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Conversation {
    pub id: DbId,
    pub user_low_id: DbId,
    pub user_high_id: DbId,
    pub is_locked: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Conversation {
    /// Whether `user_id` is one of the two participants.
    pub fn involves(&self, user_id: DbId) -> bool {
        self.user_low_id == user_id || self.user_high_id == user_id
    }

    /// The participant other than `user_id`.
    ///
    /// Returns `None` when `user_id` is not a participant.
    pub fn other_participant(&self, user_id: DbId) -> Option<DbId> {
        if self.user_low_id == user_id {
            Some(self.user_high_id)
        } else if self.user_high_id == user_id {
            Some(self.user_low_id)
        } else {
            None
        }
    }
}

/// Result of the ensure/unlock routine: the current conversation plus
/// whether *this* call performed the locked→unlocked transition. Exactly one
/// of any set of racing callers observes `unlocked_now = true`, which drives
/// the single unlock notification.
#[derive(Debug, Clone)]
pub struct EnsureOutcome {
    pub conversation: Conversation,
    pub unlocked_now: bool,
}
