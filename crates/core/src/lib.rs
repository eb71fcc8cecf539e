//! Shared domain primitives for the mutuals matching core.
//!
//! Pure, storage-free building blocks used by every other crate:
//! common type aliases, the error taxonomy, canonical pair ordering,
//! reward task definitions, and message content validation.

pub mod error;
pub mod messaging;
pub mod paging;
pub mod pairing;
pub mod rewards;
pub mod types;

pub use error::CoreError;
