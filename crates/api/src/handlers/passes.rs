//! Handlers for pass edges. Mirrors the like endpoints but never touches
//! the conversation gate.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use mutuals_core::error::CoreError;
use mutuals_core::types::DbId;
use mutuals_db::models::pass::CreatePassRequest;
use mutuals_db::repositories::{PassRepo, UserRepo};

use crate::error::{is_unique_violation, AppError, AppResult};
use crate::extract::AppJson;
use crate::handlers::ensure_active_user;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/passes
///
/// Record a directed pass from the caller to `passed_id`.
pub async fn create_pass(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreatePassRequest>,
) -> AppResult<impl IntoResponse> {
    ensure_active_user(&state.pool, auth.user_id).await?;

    if input.passed_id == auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "cannot pass on yourself".into(),
        )));
    }

    if UserRepo::find_by_id(&state.pool, input.passed_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: input.passed_id,
        }));
    }

    let pass = match PassRepo::create(&state.pool, auth.user_id, input.passed_id).await {
        Ok(edge) => edge,
        Err(err) if is_unique_violation(&err, "uq_pass_edges_pair") => {
            return Err(AppError::Core(CoreError::Conflict(
                "already passed on this user".into(),
            )));
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!(
        user_id = auth.user_id,
        passed_id = input.passed_id,
        "Pass created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: pass })))
}

/// DELETE /api/v1/passes/{user_id}
///
/// Remove the caller's pass on `user_id`.
pub async fn delete_pass(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = PassRepo::delete(&state.pool, auth.user_id, user_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Pass",
            id: user_id,
        }));
    }

    tracing::info!(user_id = auth.user_id, passed_id = user_id, "Pass removed");

    Ok(Json(DataResponse {
        data: serde_json::json!({ "deleted": true }),
    }))
}
