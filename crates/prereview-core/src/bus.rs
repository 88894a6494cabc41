//! In-process notification bus.
//!
//! Events are published after a successful commit so that side effects
//! (mail, Slack, Zenodo) stay out of the transactional path. Delivery is
//! at most once: a crash between commit and publish loses the notification,
//! and a subscriber that falls behind the channel capacity skips events.

use tokio::sync::broadcast;
use uuid::Uuid;

/// A committed event as seen by subscribers.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishedEvent<E> {
    /// The resource the event was appended to.
    pub resource_id: Uuid,
    /// The version the event was committed at.
    pub resource_version: i64,
    /// The domain event.
    pub event: E,
}

/// Publish/subscribe channel for one aggregate's events.
#[derive(Debug, Clone)]
pub struct EventBus<E> {
    sender: broadcast::Sender<PublishedEvent<E>>,
}

impl<E> EventBus<E>
where
    E: Clone + Send + 'static,
{
    /// Creates a bus that buffers up to `capacity` events per subscriber.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Registers a new subscriber. It only sees events published after this
    /// call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<PublishedEvent<E>> {
        self.sender.subscribe()
    }

    /// Publishes an event to every current subscriber, returning how many
    /// received it. Having no subscribers is not an error.
    pub fn publish(&self, event: PublishedEvent<E>) -> usize {
        self.sender.send(event).unwrap_or(0)
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl<E> Default for EventBus<E>
where
    E: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new(256)
    }
}
