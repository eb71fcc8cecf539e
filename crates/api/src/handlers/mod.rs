//! HTTP handler modules.

pub mod conversations;
pub mod likes;
pub mod passes;
pub mod points;

use sqlx::PgPool;

use mutuals_core::error::CoreError;
use mutuals_core::types::DbId;
use mutuals_db::models::user::User;
use mutuals_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};

/// Load the acting user and reject banned accounts.
///
/// The user id comes from a validated token, so a missing row means the
/// account was deleted after the token was issued.
pub async fn ensure_active_user(pool: &PgPool, user_id: DbId) -> AppResult<User> {
    let user = UserRepo::find_by_id(pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;

    if user.banned {
        return Err(AppError::Core(CoreError::Forbidden(
            "account is banned".into(),
        )));
    }

    Ok(user)
}
