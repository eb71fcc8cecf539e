//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` request DTOs where the API accepts a body

pub mod conversation;
pub mod like;
pub mod message;
pub mod pass;
pub mod reward;
pub mod user;
