//! User model. Users are owned by the external profile store; this core
//! only reads the `verified` and `banned` flags.

use serde::Serialize;
use sqlx::FromRow;

use mutuals_core::types::{DbId, Timestamp};

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub display_name: String,
    pub verified: bool,
    pub banned: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
