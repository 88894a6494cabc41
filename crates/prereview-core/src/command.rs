//! Command abstractions and the generic command handler.
//!
//! A command is handled in one optimistic read-decide-append cycle: load the
//! resource's events, fold them into state, decide, commit at the version
//! that was read, then publish. A lost race surfaces as
//! `EventStoreError::ResourceHasChanged` and is never retried here.

use uuid::Uuid;

use crate::aggregate::Decider;
use crate::bus::{EventBus, PublishedEvent};
use crate::clock::Clock;
use crate::error::{CommandError, EventStoreError};
use crate::event::DomainEvent;
use crate::repository::{EventRepository, NewEvent};

/// Trait that all commands implement.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// The type name for this command (for logging/routing).
    fn command_type(&self) -> &'static str;
}

/// Result of a successfully handled command.
#[derive(Debug, Clone)]
pub struct CommandOutcome<E> {
    /// The resource the event was appended to.
    pub resource_id: Uuid,
    /// The version the event was committed at.
    pub resource_version: i64,
    /// The committed event.
    pub event: E,
}

/// Loads a resource's history and folds it into current state.
///
/// Returns the state together with the version it reflects, which is the
/// `expected_version` for a subsequent commit.
///
/// # Errors
///
/// Returns `EventStoreError::WrongResourceType` if the resource belongs to
/// another aggregate kind, and `EventStoreError::FailedToGetEvents` if
/// loading or decoding fails.
pub async fn load_state<D: Decider>(
    resource_id: Uuid,
    repo: &dyn EventRepository,
) -> Result<(D::State, i64), EventStoreError> {
    let history = repo.get_events(resource_id).await?;
    if let Some(foreign) = history
        .events
        .iter()
        .find(|e| e.resource_type != D::RESOURCE_TYPE)
    {
        return Err(EventStoreError::WrongResourceType {
            resource_id,
            expected: D::RESOURCE_TYPE,
            actual: foreign.resource_type.clone(),
        });
    }
    let events = history
        .events
        .iter()
        .map(D::Event::from_stored)
        .collect::<Result<Vec<_>, _>>()?;
    Ok((D::fold(&events), history.latest_version))
}

/// Handles one command against one resource.
///
/// # Errors
///
/// Returns `CommandError::Rejected` if Decide refuses the command, and
/// `CommandError::UnableToHandleCommand` if the store fails to read or
/// append, including when another writer got there first.
#[tracing::instrument(
    skip(command, repo, bus, clock),
    fields(resource_type = D::RESOURCE_TYPE, command_type = command.command_type())
)]
pub async fn handle_command<D: Decider>(
    resource_id: Uuid,
    command: &D::Command,
    repo: &dyn EventRepository,
    bus: &EventBus<D::Event>,
    clock: &dyn Clock,
) -> Result<CommandOutcome<D::Event>, CommandError<D::Error>> {
    let (state, latest_version) = load_state::<D>(resource_id, repo).await?;

    let event = D::decide(&state, command).map_err(|error| {
        tracing::debug!(%error, latest_version, "command rejected");
        CommandError::Rejected(error)
    })?;

    let new_event = NewEvent {
        resource_type: D::RESOURCE_TYPE.to_owned(),
        event_type: event.event_type().to_owned(),
        payload: event.to_payload()?,
        occurred_at: clock.now(),
    };

    let resource_version = repo
        .commit_event(resource_id, latest_version, new_event)
        .await
        .inspect_err(|error| tracing::warn!(%error, latest_version, "commit failed"))?;

    tracing::info!(
        resource_version,
        event_type = event.event_type(),
        "event committed"
    );

    bus.publish(PublishedEvent {
        resource_id,
        resource_version,
        event: event.clone(),
    });

    Ok(CommandOutcome {
        resource_id,
        resource_version,
        event,
    })
}
