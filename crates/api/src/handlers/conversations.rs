//! Handlers for conversations and messages.
//!
//! Every read goes through the repository's reconciled fetch, so a locked
//! conversation whose reciprocal like landed (but whose eager unlock was
//! lost) heals before the caller sees it.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use sqlx::PgPool;

use mutuals_core::error::CoreError;
use mutuals_core::messaging::validate_content;
use mutuals_core::types::DbId;
use mutuals_db::models::conversation::Conversation;
use mutuals_db::models::message::SendMessageRequest;
use mutuals_db::repositories::{ConversationRepo, LikeRepo, MessageRepo};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::handlers::ensure_active_user;
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Fetch a reconciled conversation and verify the caller participates.
pub(crate) async fn load_participant_conversation(
    pool: &PgPool,
    conversation_id: DbId,
    user_id: DbId,
) -> AppResult<Conversation> {
    let conversation = ConversationRepo::find_reconciled(pool, conversation_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Conversation",
            id: conversation_id,
        }))?;

    if !conversation.involves(user_id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "not a participant in this conversation".into(),
        )));
    }

    Ok(conversation)
}

/// Verify the caller owns the like edge that created the pair.
pub(crate) async fn is_originating_liker(
    pool: &PgPool,
    conversation: &Conversation,
    sender_id: DbId,
) -> Result<bool, AppError> {
    let other = conversation
        .other_participant(sender_id)
        .ok_or_else(|| AppError::InternalError("sender is not a participant".into()))?;
    Ok(LikeRepo::exists(pool, sender_id, other).await?)
}

/// GET /api/v1/conversations
///
/// List the caller's conversations, most recently updated first. Locked
/// rows are reconciled before they are returned.
pub async fn list_conversations(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let rows = ConversationRepo::list_for_user(&state.pool, auth.user_id).await?;

    let mut conversations = Vec::with_capacity(rows.len());
    for row in rows {
        conversations.push(ConversationRepo::reconcile(&state.pool, row).await?);
    }

    Ok(Json(DataResponse {
        data: conversations,
    }))
}

/// GET /api/v1/conversations/{conversation_id}
pub async fn get_conversation(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(conversation_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let conversation =
        load_participant_conversation(&state.pool, conversation_id, auth.user_id).await?;
    Ok(Json(DataResponse { data: conversation }))
}

/// GET /api/v1/conversations/{conversation_id}/messages
pub async fn list_messages(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(conversation_id): Path<DbId>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    load_participant_conversation(&state.pool, conversation_id, auth.user_id).await?;

    let messages =
        MessageRepo::list_for_conversation(&state.pool, conversation_id, params.limit, params.offset)
            .await?;
    Ok(Json(DataResponse { data: messages }))
}

/// POST /api/v1/conversations/{conversation_id}/messages
///
/// Send a message. While the conversation is locked only the single intro
/// message from the originating liker is allowed; once unlocked there is
/// no restriction beyond content validation.
pub async fn send_message(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(conversation_id): Path<DbId>,
    AppJson(input): AppJson<SendMessageRequest>,
) -> AppResult<impl IntoResponse> {
    ensure_active_user(&state.pool, auth.user_id).await?;
    let content = validate_content(&input.content).map_err(AppError::Core)?;

    let conversation =
        load_participant_conversation(&state.pool, conversation_id, auth.user_id).await?;

    let message = if conversation.is_locked {
        // While locked, only the originating liker's single intro goes
        // through; the insert itself re-checks emptiness under the row
        // lock, so concurrent sends cannot both land.
        if !is_originating_liker(&state.pool, &conversation, auth.user_id).await? {
            return Err(AppError::Core(CoreError::Forbidden(
                "conversation is locked".into(),
            )));
        }
        MessageRepo::create_intro(&state.pool, conversation_id, auth.user_id, content)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Forbidden("conversation is locked".into()))
            })?
    } else {
        MessageRepo::create(&state.pool, conversation_id, auth.user_id, content).await?
    };

    tracing::info!(
        user_id = auth.user_id,
        conversation_id,
        message_id = message.id,
        locked = conversation.is_locked,
        "Message sent"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: message })))
}
