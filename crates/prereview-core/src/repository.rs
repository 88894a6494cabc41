//! Event repository abstraction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::EventStoreError;

/// Stored representation of a domain event.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredEvent {
    /// Unique event identifier, assigned at append time. Never used for
    /// ordering.
    pub event_id: Uuid,
    /// Resource (aggregate instance) this event belongs to.
    pub resource_id: Uuid,
    /// Aggregate kind, e.g. `"feedback"`.
    pub resource_type: String,
    /// Version within the resource stream, gapless from 1.
    pub resource_version: i64,
    /// Global append order across all resources.
    pub position: i64,
    /// Event type name for routing.
    pub event_type: String,
    /// Serialized event payload.
    pub payload: serde_json::Value,
    /// Timestamp of event creation.
    pub occurred_at: DateTime<Utc>,
}

/// An event ready to be appended. Identity, version and position are
/// assigned by the store.
#[derive(Debug, Clone)]
pub struct NewEvent {
    /// Aggregate kind, e.g. `"feedback"`.
    pub resource_type: String,
    /// Event type name for routing.
    pub event_type: String,
    /// Serialized event payload.
    pub payload: serde_json::Value,
    /// Timestamp of event creation.
    pub occurred_at: DateTime<Utc>,
}

/// The ordered history of one resource.
#[derive(Debug, Clone, Default)]
pub struct ResourceEvents {
    /// Events ordered by `resource_version`.
    pub events: Vec<StoredEvent>,
    /// Version of the last event, or 0 for an unknown resource.
    pub latest_version: i64,
}

impl ResourceEvents {
    /// Builds the history from events already ordered by version.
    #[must_use]
    pub fn new(events: Vec<StoredEvent>) -> Self {
        let latest_version = events.last().map_or(0, |e| e.resource_version);
        Self {
            events,
            latest_version,
        }
    }
}

/// Repository trait for reading and appending domain events.
///
/// The only concurrency gate is the `(resource_id, resource_version)`
/// uniqueness checked by `commit_event`; implementations never lock across
/// a read and a later append.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Load all events for a resource, ordered by version.
    async fn get_events(&self, resource_id: Uuid) -> Result<ResourceEvents, EventStoreError>;

    /// Load every event in the store, ordered by global position.
    async fn get_all_events(&self) -> Result<Vec<StoredEvent>, EventStoreError>;

    /// Load every event of one aggregate kind, ordered by global position.
    async fn get_all_events_of_type(
        &self,
        resource_type: &str,
    ) -> Result<Vec<StoredEvent>, EventStoreError> {
        let mut events = self.get_all_events().await?;
        events.retain(|e| e.resource_type == resource_type);
        Ok(events)
    }

    /// Append one event at `expected_version + 1`, returning the new version.
    ///
    /// Fails with `EventStoreError::ResourceHasChanged` when the stream is no
    /// longer at `expected_version`.
    async fn commit_event(
        &self,
        resource_id: Uuid,
        expected_version: i64,
        event: NewEvent,
    ) -> Result<i64, EventStoreError>;
}
