use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::ViewId;

/// Events published to the host application shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    ConfigReloaded,
    /// A non-intercepted navigation arrived at the configured final URL.
    NavigationCompleted { view_id: ViewId, url: String },
    /// The decision engine intercepted an outbound navigation.
    NavigationIntercepted { view_id: ViewId, url: String },
    /// A message arrived from the page over the JS bridge.
    BridgeMessage { view_id: ViewId, body: String },
    ViewClosed(ViewId),
    Shutdown,
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: Event) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(Event::ConfigReloaded);

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, Event::ConfigReloaded));
    }

    #[tokio::test]
    async fn multiple_subscribers() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(Event::Shutdown);

        let e1 = rx1.recv().await.unwrap();
        let e2 = rx2.recv().await.unwrap();
        assert!(matches!(e1, Event::Shutdown));
        assert!(matches!(e2, Event::Shutdown));
    }

    #[tokio::test]
    async fn navigation_events() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();
        let view = ViewId(1);

        bus.publish(Event::NavigationIntercepted {
            view_id: view,
            url: "intent://scan/#Intent;scheme=zxing;end".into(),
        });
        bus.publish(Event::NavigationCompleted {
            view_id: view,
            url: "https://example.com/done".into(),
        });

        let e1 = rx.recv().await.unwrap();
        assert!(matches!(e1, Event::NavigationIntercepted { view_id, .. } if view_id == view));

        let e2 = rx.recv().await.unwrap();
        assert!(
            matches!(e2, Event::NavigationCompleted { view_id, ref url } if view_id == view && url == "https://example.com/done")
        );
    }

    #[test]
    fn publish_returns_zero_with_no_subscribers() {
        let bus = EventBus::new(16);
        let count = bus.publish(Event::Shutdown);
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn publish_returns_subscriber_count() {
        let bus = EventBus::new(16);
        let _rx1 = bus.subscribe();
        let _rx2 = bus.subscribe();

        let count = bus.publish(Event::ConfigReloaded);
        assert_eq!(count, 2);
    }

    #[test]
    fn unknown_event_deserializes() {
        let json = r#"{"type":"SomeNewEventWeNeverHeardOf","data":null}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert!(matches!(event, Event::Unknown));
    }
}
