//! Reward ledger models.

use serde::Serialize;
use sqlx::FromRow;

use mutuals_core::types::{ClaimDate, DbId, Timestamp};

/// A row from the `reward_ledgers` table: one per user, vivified lazily.
///
/// The date columns hold the UTC calendar day of the last successful claim
/// of each kind; `total_points` is monotonically increasing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RewardLedger {
    pub user_id: DbId,
    pub total_points: i64,
    pub daily_checkin_date: Option<ClaimDate>,
    pub daily_like_date: Option<ClaimDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Response payload for a successful claim.
#[derive(Debug, Clone, Serialize)]
pub struct ClaimOutcome {
    pub total_points: i64,
    pub granted: i64,
}
