pub mod conversations;
pub mod health;
pub mod likes;
pub mod passes;
pub mod points;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /likes                                   create (POST), list (GET)
/// /likes/{user_id}                         delete
///
/// /passes                                  create (POST)
/// /passes/{user_id}                        delete
///
/// /conversations                           list
/// /conversations/{conversation_id}         get (reconciled)
/// /conversations/{conversation_id}/messages  list, send
///
/// /points                                  ledger snapshot
/// /points/claim-daily                      daily check-in claim
/// /points/claim-daily-like                 daily like bonus claim
/// /points/mark-intro-sent                  gated intro message
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/likes", likes::router())
        .nest("/passes", passes::router())
        .nest("/conversations", conversations::router())
        .nest("/points", points::router())
}
