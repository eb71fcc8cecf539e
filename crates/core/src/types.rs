/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Reward claim dates are date-granular UTC calendar days, not timestamps.
pub type ClaimDate = chrono::NaiveDate;
