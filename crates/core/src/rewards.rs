//! Daily reward task kinds.
//!
//! Each task is keyed on a UTC calendar date column in `reward_ledgers`;
//! the repository builds its conditional update around
//! [`RewardTask::date_column`]. Point values are configuration, not
//! constants -- see `ServerConfig` in the API crate.

use serde::{Deserialize, Serialize};

/// A date-keyed reward task. At most one successful claim per UTC day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardTask {
    /// Daily check-in, claimable unconditionally once per day.
    DailyCheckin,
    /// Bonus for having created at least one like edge today.
    DailyLikeBonus,
}

impl RewardTask {
    /// The `reward_ledgers` column holding the last successful claim date
    /// for this task. Used to build the predicate-guarded update.
    pub fn date_column(self) -> &'static str {
        match self {
            RewardTask::DailyCheckin => "daily_checkin_date",
            RewardTask::DailyLikeBonus => "daily_like_date",
        }
    }

    /// Human-readable task name for logs and error messages.
    pub fn name(self) -> &'static str {
        match self {
            RewardTask::DailyCheckin => "daily check-in",
            RewardTask::DailyLikeBonus => "daily like bonus",
        }
    }
}

/// Default point value for the daily check-in task.
pub const DEFAULT_DAILY_CHECKIN_POINTS: i64 = 50;
/// Default point value for the daily like bonus task.
pub const DEFAULT_DAILY_LIKE_POINTS: i64 = 25;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_columns_are_distinct() {
        assert_ne!(
            RewardTask::DailyCheckin.date_column(),
            RewardTask::DailyLikeBonus.date_column()
        );
    }
}
