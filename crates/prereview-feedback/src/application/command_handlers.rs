//! Command handlers for the Feedback context.
//!
//! Feedback commands go through the generic optimistic cycle in
//! `prereview_core::command`: load, decide, commit at the version read,
//! publish.

use prereview_core::bus::EventBus;
use prereview_core::clock::Clock;
use prereview_core::command::{CommandOutcome, handle_command};
use prereview_core::error::CommandError;
use prereview_core::repository::EventRepository;
use uuid::Uuid;

use crate::domain::aggregates::Feedback;
use crate::domain::commands::FeedbackCommand;
use crate::domain::errors::FeedbackError;
use crate::domain::events::FeedbackEvent;

/// Handles one command against the feedback identified by `feedback_id`.
///
/// # Errors
///
/// Returns `CommandError::Rejected` with a `FeedbackError` if the command is
/// illegal in the current state, or `CommandError::UnableToHandleCommand` if
/// the store fails or the feedback changed since it was read.
pub async fn handle_feedback_command(
    feedback_id: Uuid,
    command: &FeedbackCommand,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
    bus: &EventBus<FeedbackEvent>,
) -> Result<CommandOutcome<FeedbackEvent>, CommandError<FeedbackError>> {
    handle_command::<Feedback>(feedback_id, command, repo, bus, clock).await
}
