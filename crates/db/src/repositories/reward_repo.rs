//! Repository for the `reward_ledgers` table.
//!
//! The daily-claim idempotency primitive lives here: a single conditional
//! UPDATE whose WHERE clause compares the task's date column against the
//! caller-supplied UTC day. The database sequences concurrent claims, so
//! only the first to commit still sees a stale date; everyone else gets
//! zero rows affected.

use sqlx::PgPool;

use mutuals_core::rewards::RewardTask;
use mutuals_core::types::{ClaimDate, DbId};

use crate::models::reward::RewardLedger;

/// Column list for reward_ledgers queries.
const LEDGER_COLUMNS: &str =
    "user_id, total_points, daily_checkin_date, daily_like_date, created_at, updated_at";

/// Provides operations on per-user reward ledgers.
pub struct RewardRepo;

impl RewardRepo {
    /// Fetch the user's ledger, creating the zeroed row if absent.
    ///
    /// Vivification goes through `ON CONFLICT DO NOTHING` so concurrent
    /// first reads cannot error on the primary key.
    pub async fn find_or_create(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<RewardLedger, sqlx::Error> {
        sqlx::query("INSERT INTO reward_ledgers (user_id) VALUES ($1) ON CONFLICT (user_id) DO NOTHING")
            .bind(user_id)
            .execute(pool)
            .await?;

        let query = format!("SELECT {LEDGER_COLUMNS} FROM reward_ledgers WHERE user_id = $1");
        sqlx::query_as::<_, RewardLedger>(&query)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Attempt a daily claim for `task` on the UTC calendar day `today`.
    ///
    /// `today` is computed once by the caller and passed in, so the
    /// precondition and the write see the same day even across a midnight
    /// boundary. Returns the new point total on success, or `None` when
    /// the task was already claimed today (zero rows matched the guard).
    ///
    /// The point delta and the date stamp land in one statement; a claim
    /// never partially applies.
    pub async fn claim(
        pool: &PgPool,
        user_id: DbId,
        task: RewardTask,
        today: ClaimDate,
        amount: i64,
    ) -> Result<Option<i64>, sqlx::Error> {
        // The row is guaranteed to exist before the guarded update runs.
        sqlx::query("INSERT INTO reward_ledgers (user_id) VALUES ($1) ON CONFLICT (user_id) DO NOTHING")
            .bind(user_id)
            .execute(pool)
            .await?;

        let date_column = task.date_column();
        let query = format!(
            "UPDATE reward_ledgers
             SET total_points = total_points + $2,
                 {date_column} = $3,
                 updated_at = NOW()
             WHERE user_id = $1
               AND ({date_column} IS NULL OR {date_column} <> $3)
             RETURNING total_points"
        );

        let row: Option<(i64,)> = sqlx::query_as(&query)
            .bind(user_id)
            .bind(amount)
            .bind(today)
            .fetch_optional(pool)
            .await?;

        Ok(row.map(|(total,)| total))
    }
}
