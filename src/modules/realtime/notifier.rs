use tokio::sync::broadcast;
use tracing::debug;

use super::events::CvEvent;

/// Fire-and-forget publish seam handed to the engines. Publishing can
/// never fail from the caller's point of view; delivery is best-effort.
pub trait EventPublisher: Send + Sync {
    fn publish(&self, event: CvEvent);
}

/// Fan-out over a `tokio::sync::broadcast` channel. Zero subscribers is
/// a normal state; lagging receivers drop events rather than exerting
/// backpressure on the mutation path.
#[derive(Clone)]
pub struct BroadcastNotifier {
    tx: broadcast::Sender<CvEvent>,
}

impl BroadcastNotifier {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<CvEvent> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl EventPublisher for BroadcastNotifier {
    fn publish(&self, event: CvEvent) {
        let name = event.name();
        if self.tx.send(event).is_err() {
            debug!(event = name, "no live subscribers for event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cv::domain::entities::test_fixtures::sample_record;

    #[tokio::test]
    async fn delivers_to_all_subscribers() {
        let notifier = BroadcastNotifier::new(8);
        let mut rx_a = notifier.subscribe();
        let mut rx_b = notifier.subscribe();

        notifier.publish(CvEvent::CvCreated(sample_record()));

        let got_a = rx_a.recv().await.unwrap();
        let got_b = rx_b.recv().await.unwrap();
        assert_eq!(got_a.name(), "cvCreated");
        assert_eq!(got_b.name(), "cvCreated");
    }

    #[tokio::test]
    async fn publish_without_subscribers_is_silent() {
        let notifier = BroadcastNotifier::new(8);
        // Must not panic or error back to the caller.
        notifier.publish(CvEvent::CvUpdated(sample_record()));
        assert_eq!(notifier.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn preserves_publish_order_per_subscriber() {
        let notifier = BroadcastNotifier::new(8);
        let mut rx = notifier.subscribe();

        notifier.publish(CvEvent::CvCreated(sample_record()));
        notifier.publish(CvEvent::CvUpdated(sample_record()));

        assert_eq!(rx.recv().await.unwrap().name(), "cvCreated");
        assert_eq!(rx.recv().await.unwrap().name(), "cvUpdated");
    }
}
