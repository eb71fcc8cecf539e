//! Mutuals event bus and notification infrastructure.
//!
//! - [`EventBus`] — in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`DomainEvent`] — the canonical domain event envelope.
//! - [`NotificationDispatcher`] — background consumer that hands unlock
//!   notifications to the external delivery channel, fire-and-forget.

pub mod bus;
pub mod dispatcher;

pub use bus::{DomainEvent, EventBus, EVENT_CONVERSATION_UNLOCKED, EVENT_LIKE_CREATED};
pub use dispatcher::NotificationDispatcher;
