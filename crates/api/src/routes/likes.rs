//! Route definitions for the interest registry.
//!
//! ```text
//! POST   /              create_like
//! GET    /              list_likes
//! DELETE /{user_id}     delete_like
//! ```

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::likes;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(likes::list_likes).post(likes::create_like))
        .route("/{user_id}", delete(likes::delete_like))
}
