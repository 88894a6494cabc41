//! Shared application state.

use std::sync::Arc;

use prereview_comments::domain::events::CommentEvent;
use prereview_core::bus::EventBus;
use prereview_core::clock::Clock;
use prereview_core::repository::EventRepository;
use prereview_dataset_reviews::domain::events::DatasetReviewEvent;
use prereview_feedback::domain::events::FeedbackEvent;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Source of `occurred_at` timestamps.
    pub clock: Arc<dyn Clock>,
    /// The event store every aggregate shares.
    pub event_repository: Arc<dyn EventRepository>,
    /// Notifications for committed feedback events.
    pub feedback_bus: EventBus<FeedbackEvent>,
    /// Notifications for committed comment events.
    pub comment_bus: EventBus<CommentEvent>,
    /// Notifications for committed dataset review events.
    pub dataset_review_bus: EventBus<DatasetReviewEvent>,
}

impl AppState {
    /// Create new application state with one bus per aggregate.
    ///
    /// # Panics
    ///
    /// Panics if `bus_capacity` is zero.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        event_repository: Arc<dyn EventRepository>,
        bus_capacity: usize,
    ) -> Self {
        Self {
            clock,
            event_repository,
            feedback_bus: EventBus::new(bus_capacity),
            comment_bus: EventBus::new(bus_capacity),
            dataset_review_bus: EventBus::new(bus_capacity),
        }
    }
}
