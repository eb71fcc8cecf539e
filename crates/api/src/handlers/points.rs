//! Handlers for the reward ledger: daily claims and the gated intro.
//!
//! Claims are idempotent per UTC calendar day. "Today" is computed exactly
//! once per request and handed to the repository, so the precondition and
//! the guarded write always agree on the day even across midnight.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use mutuals_core::error::CoreError;
use mutuals_core::messaging::validate_content;
use mutuals_core::rewards::RewardTask;
use mutuals_core::types::DbId;
use mutuals_db::models::message::MarkIntroSentRequest;
use mutuals_db::models::reward::ClaimOutcome;
use mutuals_db::repositories::{LikeRepo, MessageRepo, RewardRepo};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::handlers::conversations::{is_originating_liker, load_participant_conversation};
use crate::handlers::ensure_active_user;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Shared claim flow for both date-keyed tasks.
async fn run_claim(
    state: &AppState,
    user_id: DbId,
    task: RewardTask,
    amount: i64,
) -> AppResult<ClaimOutcome> {
    let today = chrono::Utc::now().date_naive();

    if task == RewardTask::DailyLikeBonus
        && !LikeRepo::has_liked_on(&state.pool, user_id, today).await?
    {
        return Err(AppError::Core(CoreError::Forbidden(
            "daily like bonus requires at least one like today".into(),
        )));
    }

    let total_points = RewardRepo::claim(&state.pool, user_id, task, today, amount)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(format!(
                "{} already claimed today",
                task.name()
            )))
        })?;

    tracing::info!(
        user_id,
        task = task.name(),
        granted = amount,
        total_points,
        "Daily reward claimed"
    );

    Ok(ClaimOutcome {
        total_points,
        granted: amount,
    })
}

/// POST /api/v1/points/claim-daily
///
/// Claim the daily check-in reward. At most one grant per UTC day; a
/// repeat claim returns 409, which clients should render as informational.
pub async fn claim_daily(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    ensure_active_user(&state.pool, auth.user_id).await?;

    let outcome = run_claim(
        &state,
        auth.user_id,
        RewardTask::DailyCheckin,
        state.config.daily_checkin_points,
    )
    .await?;

    Ok(Json(DataResponse { data: outcome }))
}

/// POST /api/v1/points/claim-daily-like
///
/// Claim the daily-like bonus. Requires at least one like edge created by
/// the caller during the current UTC day.
pub async fn claim_daily_like(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    ensure_active_user(&state.pool, auth.user_id).await?;

    let outcome = run_claim(
        &state,
        auth.user_id,
        RewardTask::DailyLikeBonus,
        state.config.daily_like_points,
    )
    .await?;

    Ok(Json(DataResponse { data: outcome }))
}

/// POST /api/v1/points/mark-intro-sent
///
/// Record the gated first message of a locked conversation. Enforces the
/// same lock rules as the conversation send path, but reports an existing
/// intro as a conflict rather than a lock violation.
pub async fn mark_intro_sent(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<MarkIntroSentRequest>,
) -> AppResult<impl IntoResponse> {
    ensure_active_user(&state.pool, auth.user_id).await?;
    let content = validate_content(&input.content).map_err(AppError::Core)?;

    let conversation =
        load_participant_conversation(&state.pool, input.conversation_id, auth.user_id).await?;

    if !conversation.is_locked {
        return Err(AppError::Core(CoreError::Conflict(
            "conversation is already unlocked; send messages normally".into(),
        )));
    }

    if !is_originating_liker(&state.pool, &conversation, auth.user_id).await? {
        return Err(AppError::Core(CoreError::Forbidden(
            "only the originating liker may send the intro message".into(),
        )));
    }

    let message = MessageRepo::create_intro(&state.pool, conversation.id, auth.user_id, content)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(
                "intro message already sent for this conversation".into(),
            ))
        })?;

    tracing::info!(
        user_id = auth.user_id,
        conversation_id = conversation.id,
        message_id = message.id,
        "Intro message recorded"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: message })))
}

/// GET /api/v1/points
///
/// Current reward ledger snapshot for the caller, vivified lazily.
pub async fn get_points(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let ledger = RewardRepo::find_or_create(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: ledger }))
}
