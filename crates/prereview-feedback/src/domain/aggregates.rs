//! The Feedback aggregate.

use prereview_core::aggregate::Decider;

use super::commands::FeedbackCommand;
use super::errors::FeedbackError;
use super::events::FeedbackEvent;
use super::state::FeedbackState;
use super::{decide, state};

/// Resource type recorded on every feedback event.
pub const FEEDBACK_RESOURCE_TYPE: &str = "feedback";

/// Feedback written by a user on a published PREreview.
#[derive(Debug, Clone, Copy)]
pub struct Feedback;

impl Decider for Feedback {
    type State = FeedbackState;
    type Command = FeedbackCommand;
    type Event = FeedbackEvent;
    type Error = FeedbackError;

    const RESOURCE_TYPE: &'static str = FEEDBACK_RESOURCE_TYPE;

    fn initial_state() -> FeedbackState {
        FeedbackState::NotStarted
    }

    fn evolve(state: FeedbackState, event: &FeedbackEvent) -> FeedbackState {
        state::evolve(state, event)
    }

    fn decide(
        state: &FeedbackState,
        command: &FeedbackCommand,
    ) -> Result<FeedbackEvent, FeedbackError> {
        decide::decide(state, command)
    }
}
