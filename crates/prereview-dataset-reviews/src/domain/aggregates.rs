//! The Dataset Review aggregate.

use prereview_core::aggregate::Decider;

use super::commands::DatasetReviewCommand;
use super::errors::DatasetReviewError;
use super::events::DatasetReviewEvent;
use super::state::DatasetReviewState;
use super::{decide, state};

/// Resource type recorded on every dataset review event.
pub const DATASET_REVIEW_RESOURCE_TYPE: &str = "dataset-review";

/// A review of a dataset.
#[derive(Debug, Clone, Copy)]
pub struct DatasetReview;

impl Decider for DatasetReview {
    type State = DatasetReviewState;
    type Command = DatasetReviewCommand;
    type Event = DatasetReviewEvent;
    type Error = DatasetReviewError;

    const RESOURCE_TYPE: &'static str = DATASET_REVIEW_RESOURCE_TYPE;

    fn initial_state() -> DatasetReviewState {
        DatasetReviewState::NotStarted
    }

    fn evolve(state: DatasetReviewState, event: &DatasetReviewEvent) -> DatasetReviewState {
        state::evolve(state, event)
    }

    fn decide(
        state: &DatasetReviewState,
        command: &DatasetReviewCommand,
    ) -> Result<DatasetReviewEvent, DatasetReviewError> {
        decide::decide(state, command)
    }
}
