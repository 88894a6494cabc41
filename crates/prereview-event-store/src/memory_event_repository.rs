//! In-memory implementation of the `EventRepository` trait.
//!
//! Holds the whole log in a single `Vec` behind an `RwLock`. The version
//! check and the push happen under one write lock, which plays the part of
//! the database's uniqueness constraint.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use uuid::Uuid;

use prereview_core::error::EventStoreError;
use prereview_core::repository::{EventRepository, NewEvent, ResourceEvents, StoredEvent};

/// Event repository kept in process memory. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventRepository {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    events: Vec<StoredEvent>,
    versions: HashMap<Uuid, i64>,
}

impl InMemoryEventRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: PoisonError<T>) -> String {
    "in-memory event store lock poisoned".to_owned()
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn get_events(&self, resource_id: Uuid) -> Result<ResourceEvents, EventStoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|e| EventStoreError::FailedToGetEvents(poisoned(e)))?;
        let events = inner
            .events
            .iter()
            .filter(|e| e.resource_id == resource_id)
            .cloned()
            .collect();
        Ok(ResourceEvents::new(events))
    }

    async fn get_all_events(&self) -> Result<Vec<StoredEvent>, EventStoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|e| EventStoreError::FailedToGetEvents(poisoned(e)))?;
        Ok(inner.events.clone())
    }

    #[tracing::instrument(skip(self, event), fields(event_type = %event.event_type))]
    async fn commit_event(
        &self,
        resource_id: Uuid,
        expected_version: i64,
        event: NewEvent,
    ) -> Result<i64, EventStoreError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| EventStoreError::FailedToCommitEvent(poisoned(e)))?;

        let current_version = inner.versions.get(&resource_id).copied().unwrap_or(0);
        if current_version != expected_version {
            tracing::debug!(current_version, "append rejected by version check");
            return Err(EventStoreError::ResourceHasChanged {
                resource_id,
                expected_version,
            });
        }

        let resource_version = expected_version + 1;
        let position = i64::try_from(inner.events.len())
            .map_err(|e| EventStoreError::FailedToCommitEvent(e.to_string()))?
            + 1;
        inner.events.push(StoredEvent {
            event_id: Uuid::now_v7(),
            resource_id,
            resource_type: event.resource_type,
            resource_version,
            position,
            event_type: event.event_type,
            payload: event.payload,
            occurred_at: event.occurred_at,
        });
        inner.versions.insert(resource_id, resource_version);

        Ok(resource_version)
    }
}
