//! Event bus for socialhub using tokio::broadcast
//!
//! Session changes are published here so every frontend sharing a `Session`
//! (TUI and web in `socialhub both`) sees sign-in and sign-out.

use tokio::sync::broadcast;

/// Events emitted by the session gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A saved record was read from the slot at startup (user email)
    Restored(String),
    /// A malformed saved record was dropped at startup
    Discarded,
    /// Login or registration succeeded (user email)
    SignedIn(String),
    /// The session was cleared
    SignedOut,
}

/// Event bus for broadcasting session events
///
/// TUI subscribes to redirect on sign-out, web handlers only publish.
pub struct EventBus {
    sender: broadcast::Sender<SessionEvent>,
}

impl EventBus {
    /// Create a new event bus with specified channel capacity
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Create with default capacity (64 events)
    pub fn default_capacity() -> Self {
        Self::new(64)
    }

    /// Publish an event to all subscribers
    pub fn publish(&self, event: SessionEvent) {
        // No subscribers is fine
        let _ = self.sender.send(event);
    }

    /// Subscribe to receive events
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.sender.subscribe()
    }

    /// Get current number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::default_capacity()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_event_bus_publish_subscribe() {
        let bus = EventBus::default_capacity();
        let mut rx = bus.subscribe();

        bus.publish(SessionEvent::SignedIn("ana@example.com".to_string()));
        bus.publish(SessionEvent::SignedOut);

        let first = rx.recv().await.unwrap();
        assert_eq!(first, SessionEvent::SignedIn("ana@example.com".to_string()));
        assert_eq!(rx.recv().await.unwrap(), SessionEvent::SignedOut);
    }

    #[tokio::test]
    async fn test_event_bus_multiple_subscribers() {
        let bus = EventBus::default_capacity();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        assert_eq!(bus.subscriber_count(), 2);

        bus.publish(SessionEvent::Discarded);

        assert_eq!(rx1.recv().await.unwrap(), SessionEvent::Discarded);
        assert_eq!(rx2.recv().await.unwrap(), SessionEvent::Discarded);
    }

    #[test]
    fn test_event_bus_no_subscribers_ok() {
        let bus = EventBus::default_capacity();
        bus.publish(SessionEvent::SignedOut);
    }
}
