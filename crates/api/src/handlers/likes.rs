//! Handlers for the interest registry: directed like edges.
//!
//! A successful like insert also runs the conversation gate's
//! ensure/unlock routine. Gate failures are logged but never roll back the
//! like -- the like edge is the source of truth and the read path's
//! repair-on-read recovers the conversation state lazily.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use mutuals_core::error::CoreError;
use mutuals_core::types::DbId;
use mutuals_db::models::conversation::Conversation;
use mutuals_db::models::like::{CreateLikeRequest, LikeEdge};
use mutuals_db::models::reward::RewardLedger;
use mutuals_db::repositories::{ConversationRepo, LikeRepo, RewardRepo, UserRepo};
use mutuals_events::{DomainEvent, EVENT_CONVERSATION_UNLOCKED, EVENT_LIKE_CREATED};

use crate::error::{is_unique_violation, AppError, AppResult};
use crate::extract::AppJson;
use crate::handlers::ensure_active_user;
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response payload for a successful like: the edge, the pair's current
/// conversation state (when the gate succeeded), and the caller's reward
/// snapshot so the UI can render without a second fetch.
#[derive(Debug, Serialize)]
pub struct LikeCreatedResponse {
    pub like: LikeEdge,
    pub conversation: Option<Conversation>,
    pub reward: RewardLedger,
}

/// POST /api/v1/likes
///
/// Record a directed like from the caller to `liked_id`.
pub async fn create_like(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateLikeRequest>,
) -> AppResult<impl IntoResponse> {
    ensure_active_user(&state.pool, auth.user_id).await?;

    if input.liked_id == auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "cannot like yourself".into(),
        )));
    }

    // The target must be a visible profile: verified and not banned.
    let target = UserRepo::find_by_id(&state.pool, input.liked_id).await?;
    let target_visible = target.map(|t| t.verified && !t.banned).unwrap_or(false);
    if !target_visible {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: input.liked_id,
        }));
    }

    let like = match LikeRepo::create(&state.pool, auth.user_id, input.liked_id).await {
        Ok(edge) => edge,
        Err(err) if is_unique_violation(&err, "uq_like_edges_pair") => {
            return Err(AppError::Core(CoreError::Conflict(
                "already liked this user".into(),
            )));
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!(
        user_id = auth.user_id,
        liked_id = input.liked_id,
        "Like created"
    );

    state.event_bus.publish(
        DomainEvent::new(EVENT_LIKE_CREATED)
            .with_source("like", like.id)
            .with_actor(auth.user_id),
    );

    // Run the conversation gate. The like is already committed; if the
    // gate fails here the lock state is recovered lazily on read.
    let conversation =
        match ConversationRepo::ensure_for_like(&state.pool, auth.user_id, input.liked_id).await
        {
            Ok(outcome) => {
                if outcome.unlocked_now {
                    tracing::info!(
                        conversation_id = outcome.conversation.id,
                        user_id = auth.user_id,
                        liked_id = input.liked_id,
                        "Mutual match, conversation unlocked"
                    );
                    state.event_bus.publish(
                        DomainEvent::new(EVENT_CONVERSATION_UNLOCKED)
                            .with_source("conversation", outcome.conversation.id)
                            .with_actor(auth.user_id)
                            .with_payload(serde_json::json!({
                                "user_low_id": outcome.conversation.user_low_id,
                                "user_high_id": outcome.conversation.user_high_id,
                            })),
                    );
                }
                Some(outcome.conversation)
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    user_id = auth.user_id,
                    liked_id = input.liked_id,
                    "Conversation gate failed after like insert"
                );
                None
            }
        };

    let reward = RewardRepo::find_or_create(&state.pool, auth.user_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: LikeCreatedResponse {
                like,
                conversation,
                reward,
            },
        }),
    ))
}

/// DELETE /api/v1/likes/{user_id}
///
/// Remove the caller's like of `user_id`. Removing a like never re-locks
/// an already-unlocked conversation.
pub async fn delete_like(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = LikeRepo::delete(&state.pool, auth.user_id, user_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Like",
            id: user_id,
        }));
    }

    tracing::info!(user_id = auth.user_id, liked_id = user_id, "Like removed");

    Ok(Json(DataResponse {
        data: serde_json::json!({ "deleted": true }),
    }))
}

/// GET /api/v1/likes
///
/// Page of profiles the caller has liked, each annotated with the pair's
/// conversation state and whether the caller already sent an intro.
pub async fn list_likes(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let profiles =
        LikeRepo::list_liked_profiles(&state.pool, auth.user_id, params.limit, params.offset)
            .await?;
    Ok(Json(DataResponse { data: profiles }))
}
