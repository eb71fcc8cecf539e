//! Route definitions for pass edges.
//!
//! ```text
//! POST   /              create_pass
//! DELETE /{user_id}     delete_pass
//! ```

use axum::routing::{delete, post};
use axum::Router;

use crate::handlers::passes;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(passes::create_pass))
        .route("/{user_id}", delete(passes::delete_pass))
}
