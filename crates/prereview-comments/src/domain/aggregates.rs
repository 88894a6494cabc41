//! The Comment aggregate.

use prereview_core::aggregate::Decider;

use super::commands::CommentCommand;
use super::errors::CommentError;
use super::events::CommentEvent;
use super::state::CommentState;
use super::{decide, state};

/// Resource type recorded on every comment event.
pub const COMMENT_RESOURCE_TYPE: &str = "comment";

/// A comment on a published PREreview.
#[derive(Debug, Clone, Copy)]
pub struct Comment;

impl Decider for Comment {
    type State = CommentState;
    type Command = CommentCommand;
    type Event = CommentEvent;
    type Error = CommentError;

    const RESOURCE_TYPE: &'static str = COMMENT_RESOURCE_TYPE;

    fn initial_state() -> CommentState {
        CommentState::NotStarted
    }

    fn evolve(state: CommentState, event: &CommentEvent) -> CommentState {
        state::evolve(state, event)
    }

    fn decide(
        state: &CommentState,
        command: &CommentCommand,
    ) -> Result<CommentEvent, CommentError> {
        decide::decide(state, command)
    }
}
