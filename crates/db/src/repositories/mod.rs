//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. State transitions that can race
//! (conversation unlock, daily claims) are single conditional UPDATEs whose
//! WHERE clause re-checks the guarded field, never read-then-write.

pub mod conversation_repo;
pub mod like_repo;
pub mod message_repo;
pub mod pass_repo;
pub mod reward_repo;
pub mod user_repo;

pub use conversation_repo::ConversationRepo;
pub use like_repo::LikeRepo;
pub use message_repo::MessageRepo;
pub use pass_repo::PassRepo;
pub use reward_repo::RewardRepo;
pub use user_repo::UserRepo;
