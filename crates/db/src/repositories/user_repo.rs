//! Read-only repository for the `users` table.
//!
//! User rows are owned by the external profile store; the matching core
//! only ever reads them.

use sqlx::PgPool;

use mutuals_core::types::DbId;

use crate::models::user::User;

/// Column list for users queries.
const USER_COLUMNS: &str = "id, display_name, verified, banned, created_at, updated_at";

/// Provides read operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Find a user by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
