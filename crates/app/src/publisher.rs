//! Outlet for drained domain events.

use postboard_domain::DomainEvent;

/// Receives events pulled off an aggregate after it has been persisted.
pub trait EventPublisher: Send + Sync {
    fn publish(&self, event: &DomainEvent);
}

/// Default publisher: emits each event's canonical JSON through `tracing`,
/// standing in for an event log or message bus consumer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventPublisher;

impl EventPublisher for TracingEventPublisher {
    fn publish(&self, event: &DomainEvent) {
        tracing::info!(
            event_type = event.event_type(),
            event = %event.to_json(),
            "domain event recorded"
        );
    }
}
