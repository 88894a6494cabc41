//! Domain event abstractions.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::EventStoreError;
use crate::repository::StoredEvent;

/// Trait that all domain events implement.
///
/// An event is a tagged union persisted as a JSON payload; the envelope
/// around it lives in [`StoredEvent`].
pub trait DomainEvent:
    Serialize + DeserializeOwned + Clone + std::fmt::Debug + Send + Sync + 'static
{
    /// Returns the event type name (used for routing and logging).
    fn event_type(&self) -> &'static str;

    /// Serializes the event payload to JSON.
    ///
    /// # Errors
    ///
    /// Returns `EventStoreError::FailedToCommitEvent` if serialization fails.
    fn to_payload(&self) -> Result<serde_json::Value, EventStoreError> {
        serde_json::to_value(self).map_err(|e| {
            EventStoreError::FailedToCommitEvent(format!("event serialization failed: {e}"))
        })
    }

    /// Decodes the payload of a stored event.
    ///
    /// # Errors
    ///
    /// Returns `EventStoreError::FailedToGetEvents` if the payload does not
    /// match this event type.
    fn from_stored(stored: &StoredEvent) -> Result<Self, EventStoreError> {
        serde_json::from_value(stored.payload.clone()).map_err(|e| {
            EventStoreError::FailedToGetEvents(format!(
                "event deserialization failed for {} at version {}: {e}",
                stored.resource_id, stored.resource_version
            ))
        })
    }
}
