//! Reasons a feedback command is refused.

use thiserror::Error;

/// Domain errors for the Feedback context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    /// The feedback has already been started.
    #[error("feedback was already started")]
    FeedbackWasAlreadyStarted,

    /// The command needs feedback that has been started.
    #[error("feedback has not been started")]
    FeedbackHasNotBeenStarted,

    /// Publication needs every required field.
    #[error("feedback is incomplete")]
    FeedbackIsIncomplete,

    /// The feedback cannot be marked as published before publication was
    /// requested.
    #[error("feedback publication was not requested")]
    FeedbackPublicationWasNotRequested,

    /// The feedback is locked while it is being published.
    #[error("feedback is being published")]
    FeedbackIsBeingPublished,

    /// The feedback is already public.
    #[error("feedback was already published")]
    FeedbackWasAlreadyPublished,
}
