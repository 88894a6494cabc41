//! Error taxonomy shared by every aggregate.

use thiserror::Error;
use uuid::Uuid;

/// Errors raised by an `EventRepository`.
#[derive(Debug, Error)]
pub enum EventStoreError {
    /// Events could not be read or decoded.
    #[error("failed to get events: {0}")]
    FailedToGetEvents(String),

    /// An event could not be encoded or written.
    #[error("failed to commit event: {0}")]
    FailedToCommitEvent(String),

    /// Another writer appended to the resource after it was read.
    #[error("resource {resource_id} has changed since version {expected_version}")]
    ResourceHasChanged {
        /// The resource whose stream moved on.
        resource_id: Uuid,
        /// The version the writer expected to extend.
        expected_version: i64,
    },

    /// The resource's events were recorded by another aggregate kind.
    #[error("resource {resource_id} is a {actual}, not a {expected}")]
    WrongResourceType {
        /// The resource that was looked up.
        resource_id: Uuid,
        /// The aggregate kind the caller asked for.
        expected: &'static str,
        /// The aggregate kind recorded on the resource's events.
        actual: String,
    },
}

/// Failure of a single read-decide-append cycle.
#[derive(Debug, Error)]
pub enum CommandError<E>
where
    E: std::error::Error + 'static,
{
    /// Decide refused the command against the current state. Nothing was
    /// appended.
    #[error("command rejected: {0}")]
    Rejected(#[source] E),

    /// The store failed to read or append, including optimistic
    /// concurrency conflicts.
    #[error("unable to handle command: {0}")]
    UnableToHandleCommand(#[from] EventStoreError),
}

impl<E> CommandError<E>
where
    E: std::error::Error + 'static,
{
    /// Returns `true` when the append lost a race with another writer. The
    /// caller may restart the whole cycle.
    #[must_use]
    pub fn is_resource_changed(&self) -> bool {
        matches!(
            self,
            Self::UnableToHandleCommand(EventStoreError::ResourceHasChanged { .. })
        )
    }
}

/// Failure of a read-model query. Folding itself cannot fail, so this only
/// ever wraps an `EventStoreError`.
#[derive(Debug, Error)]
#[error("unable to query: {0}")]
pub struct QueryError(#[from] pub EventStoreError);

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("already started")]
    struct AlreadyStarted;

    #[test]
    fn test_resource_changed_is_detected_through_command_error() {
        let error: CommandError<AlreadyStarted> = EventStoreError::ResourceHasChanged {
            resource_id: Uuid::new_v4(),
            expected_version: 3,
        }
        .into();

        assert!(error.is_resource_changed());
    }

    #[test]
    fn test_storage_fault_is_not_a_conflict() {
        let error: CommandError<AlreadyStarted> =
            EventStoreError::FailedToCommitEvent("connection reset".into()).into();

        assert!(!error.is_resource_changed());
    }

    #[test]
    fn test_rejection_carries_domain_error() {
        let error = CommandError::Rejected(AlreadyStarted);

        assert!(!error.is_resource_changed());
        assert!(matches!(error, CommandError::Rejected(AlreadyStarted)));
        assert_eq!(error.to_string(), "command rejected: already started");
    }
}
