//! Test repositories — mock `EventRepository` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use prereview_core::error::EventStoreError;
use prereview_core::repository::{EventRepository, NewEvent, ResourceEvents, StoredEvent};
use uuid::Uuid;

/// An event repository serving a fixed log and recording every
/// `commit_event` call. Commits always succeed and are not added to the log.
#[derive(Debug, Default)]
pub struct RecordingEventRepository {
    events: Vec<StoredEvent>,
    committed: Mutex<Vec<(Uuid, i64, NewEvent)>>,
}

impl RecordingEventRepository {
    /// Create a new recording repository serving `events`.
    #[must_use]
    pub fn new(events: Vec<StoredEvent>) -> Self {
        Self {
            events,
            committed: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of all `(resource_id, expected_version, event)`
    /// commits.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn committed_events(&self) -> Vec<(Uuid, i64, NewEvent)> {
        self.committed.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventRepository for RecordingEventRepository {
    async fn get_events(&self, resource_id: Uuid) -> Result<ResourceEvents, EventStoreError> {
        Ok(ResourceEvents::new(
            self.events
                .iter()
                .filter(|e| e.resource_id == resource_id)
                .cloned()
                .collect(),
        ))
    }

    async fn get_all_events(&self) -> Result<Vec<StoredEvent>, EventStoreError> {
        Ok(self.events.clone())
    }

    async fn commit_event(
        &self,
        resource_id: Uuid,
        expected_version: i64,
        event: NewEvent,
    ) -> Result<i64, EventStoreError> {
        self.committed
            .lock()
            .unwrap()
            .push((resource_id, expected_version, event));
        Ok(expected_version + 1)
    }
}

/// An event repository that always returns an empty log and silently
/// accepts commits. Useful for testing unknown resources and start commands.
#[derive(Debug)]
pub struct EmptyEventRepository;

#[async_trait]
impl EventRepository for EmptyEventRepository {
    async fn get_events(&self, _resource_id: Uuid) -> Result<ResourceEvents, EventStoreError> {
        Ok(ResourceEvents::default())
    }

    async fn get_all_events(&self) -> Result<Vec<StoredEvent>, EventStoreError> {
        Ok(vec![])
    }

    async fn commit_event(
        &self,
        _resource_id: Uuid,
        expected_version: i64,
        _event: NewEvent,
    ) -> Result<i64, EventStoreError> {
        Ok(expected_version + 1)
    }
}

/// An event repository that always fails with a storage fault. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingEventRepository;

#[async_trait]
impl EventRepository for FailingEventRepository {
    async fn get_events(&self, _resource_id: Uuid) -> Result<ResourceEvents, EventStoreError> {
        Err(EventStoreError::FailedToGetEvents("connection refused".into()))
    }

    async fn get_all_events(&self) -> Result<Vec<StoredEvent>, EventStoreError> {
        Err(EventStoreError::FailedToGetEvents("connection refused".into()))
    }

    async fn commit_event(
        &self,
        _resource_id: Uuid,
        _expected_version: i64,
        _event: NewEvent,
    ) -> Result<i64, EventStoreError> {
        Err(EventStoreError::FailedToCommitEvent("connection refused".into()))
    }
}

/// An event repository serving a fixed log whose commits always lose the
/// race, as if another writer appended between the read and the write.
#[derive(Debug, Default)]
pub struct ConflictingEventRepository {
    events: Vec<StoredEvent>,
}

impl ConflictingEventRepository {
    /// Create a repository serving `events` and rejecting every commit.
    #[must_use]
    pub fn new(events: Vec<StoredEvent>) -> Self {
        Self { events }
    }
}

#[async_trait]
impl EventRepository for ConflictingEventRepository {
    async fn get_events(&self, resource_id: Uuid) -> Result<ResourceEvents, EventStoreError> {
        Ok(ResourceEvents::new(
            self.events
                .iter()
                .filter(|e| e.resource_id == resource_id)
                .cloned()
                .collect(),
        ))
    }

    async fn get_all_events(&self) -> Result<Vec<StoredEvent>, EventStoreError> {
        Ok(self.events.clone())
    }

    async fn commit_event(
        &self,
        resource_id: Uuid,
        expected_version: i64,
        _event: NewEvent,
    ) -> Result<i64, EventStoreError> {
        Err(EventStoreError::ResourceHasChanged {
            resource_id,
            expected_version,
        })
    }
}
