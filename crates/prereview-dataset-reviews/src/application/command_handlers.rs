//! Command handlers for the Dataset Reviews context.

use prereview_core::bus::EventBus;
use prereview_core::clock::Clock;
use prereview_core::command::{CommandOutcome, handle_command};
use prereview_core::error::CommandError;
use prereview_core::repository::EventRepository;
use uuid::Uuid;

use crate::domain::aggregates::DatasetReview;
use crate::domain::commands::DatasetReviewCommand;
use crate::domain::errors::DatasetReviewError;
use crate::domain::events::DatasetReviewEvent;

/// Handles one command against the dataset review identified by
/// `dataset_review_id`.
///
/// # Errors
///
/// Returns `CommandError::Rejected` with a `DatasetReviewError` if the
/// command is illegal in the current state, or
/// `CommandError::UnableToHandleCommand` if the store fails or the review
/// changed since it was read.
pub async fn handle_dataset_review_command(
    dataset_review_id: Uuid,
    command: &DatasetReviewCommand,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
    bus: &EventBus<DatasetReviewEvent>,
) -> Result<CommandOutcome<DatasetReviewEvent>, CommandError<DatasetReviewError>> {
    handle_command::<DatasetReview>(dataset_review_id, command, repo, bus, clock).await
}
