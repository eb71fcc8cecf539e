//! Pass edge models and DTOs. Structurally a mirror of like edges, but
//! passes never participate in unlocking.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use mutuals_core::types::{DbId, Timestamp};

/// A row from the `pass_edges` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PassEdge {
    pub id: DbId,
    pub passer_id: DbId,
    pub passed_id: DbId,
    pub created_at: Timestamp,
}

/// Request body for `POST /passes`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePassRequest {
    pub passed_id: DbId,
}
