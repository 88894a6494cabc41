//! Event-bus subscribers spawned alongside the HTTP server.
//!
//! Each aggregate's bus gets a task that logs what was committed. Mail,
//! Slack and Zenodo reactions subscribe the same way.

use prereview_core::bus::PublishedEvent;
use prereview_core::event::DomainEvent;
use tokio::sync::broadcast::Receiver;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::state::AppState;

/// Spawns one logging subscriber per aggregate bus.
#[must_use]
pub fn spawn_all(state: &AppState) -> Vec<JoinHandle<u64>> {
    vec![
        spawn_event_logger("feedback", state.feedback_bus.subscribe()),
        spawn_event_logger("comment", state.comment_bus.subscribe()),
        spawn_event_logger("dataset-review", state.dataset_review_bus.subscribe()),
    ]
}

/// Logs every event received until the bus is dropped, then returns how
/// many were seen. Lagging is logged and skipped.
pub fn spawn_event_logger<E: DomainEvent>(
    resource_type: &'static str,
    mut receiver: Receiver<PublishedEvent<E>>,
) -> JoinHandle<u64> {
    tokio::spawn(async move {
        let mut received = 0;
        loop {
            match receiver.recv().await {
                Ok(published) => {
                    received += 1;
                    info!(
                        resource_type,
                        resource_id = %published.resource_id,
                        resource_version = published.resource_version,
                        event_type = published.event.event_type(),
                        "event committed"
                    );
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(resource_type, skipped, "subscriber fell behind; events skipped");
                }
                Err(RecvError::Closed) => break,
            }
        }
        received
    })
}
