//! Route definitions for conversations and messages.
//!
//! ```text
//! GET    /                                list_conversations
//! GET    /{conversation_id}               get_conversation
//! GET    /{conversation_id}/messages      list_messages
//! POST   /{conversation_id}/messages      send_message
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::conversations;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(conversations::list_conversations))
        .route("/{conversation_id}", get(conversations::get_conversation))
        .route(
            "/{conversation_id}/messages",
            get(conversations::list_messages).post(conversations::send_message),
        )
}
