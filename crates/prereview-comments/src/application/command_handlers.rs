//! Command handlers for the Comments context.

use prereview_core::bus::EventBus;
use prereview_core::clock::Clock;
use prereview_core::command::{CommandOutcome, handle_command};
use prereview_core::error::CommandError;
use prereview_core::repository::EventRepository;
use uuid::Uuid;

use crate::domain::aggregates::Comment;
use crate::domain::commands::CommentCommand;
use crate::domain::errors::CommentError;
use crate::domain::events::CommentEvent;

/// Handles one command against the comment identified by `comment_id`.
///
/// # Errors
///
/// Returns `CommandError::Rejected` with a `CommentError` if the command is
/// illegal in the current state, or `CommandError::UnableToHandleCommand` if
/// the store fails or the comment changed since it was read.
pub async fn handle_comment_command(
    comment_id: Uuid,
    command: &CommentCommand,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
    bus: &EventBus<CommentEvent>,
) -> Result<CommandOutcome<CommentEvent>, CommandError<CommentError>> {
    handle_command::<Comment>(comment_id, command, repo, bus, clock).await
}
