//! Server-Sent Events for session changes

use axum::response::sse::{Event, KeepAlive, Sse};
use futures::stream::Stream;
use socialhub_core::{EventBus, SessionEvent};
use std::convert::Infallible;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

/// Create an SSE stream from the session event bus
pub fn create_sse_stream(event_bus: EventBus) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = event_bus.subscribe();
    let stream = BroadcastStream::new(rx);

    // Lagged receivers skip what they missed
    let sse_stream = stream.filter_map(|result: Result<SessionEvent, _>| {
        result.ok().map(|event| {
            let (event_type, data) = event_payload(&event);
            Ok(Event::default().event(event_type).data(data.to_string()))
        })
    });

    Sse::new(sse_stream).keep_alive(KeepAlive::default())
}

fn event_payload(event: &SessionEvent) -> (&'static str, serde_json::Value) {
    match event {
        SessionEvent::Restored(email) => ("restored", serde_json::json!({ "email": email })),
        SessionEvent::Discarded => ("discarded", serde_json::json!({})),
        SessionEvent::SignedIn(email) => ("signed_in", serde_json::json!({ "email": email })),
        SessionEvent::SignedOut => ("signed_out", serde_json::json!({})),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_payloads() {
        let (kind, data) = event_payload(&SessionEvent::SignedIn("ana@example.com".to_string()));
        assert_eq!(kind, "signed_in");
        assert_eq!(data["email"], "ana@example.com");

        let (kind, data) = event_payload(&SessionEvent::SignedOut);
        assert_eq!(kind, "signed_out");
        assert_eq!(data.to_string(), "{}");
    }
}
