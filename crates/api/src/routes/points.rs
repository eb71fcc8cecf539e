//! Route definitions for the reward ledger.
//!
//! ```text
//! GET    /                      get_points
//! POST   /claim-daily           claim_daily
//! POST   /claim-daily-like      claim_daily_like
//! POST   /mark-intro-sent       mark_intro_sent
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::points;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(points::get_points))
        .route("/claim-daily", post(points::claim_daily))
        .route("/claim-daily-like", post(points::claim_daily_like))
        .route("/mark-intro-sent", post(points::mark_intro_sent))
}
