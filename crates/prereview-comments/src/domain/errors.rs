//! Reasons a comment command is refused.

use thiserror::Error;

/// Domain errors for the Comments context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommentError {
    /// The comment has already been started.
    #[error("comment was already started")]
    CommentWasAlreadyStarted,

    /// The command needs a comment that has been started.
    #[error("comment has not been started")]
    CommentHasNotBeenStarted,

    /// Publication needs every required field.
    #[error("comment is incomplete")]
    CommentIsIncomplete,

    /// DOI assignment and publication need a prior publication request.
    #[error("comment publication was not requested")]
    CommentPublicationWasNotRequested,

    /// The comment is locked while it is being published.
    #[error("comment is being published")]
    CommentIsBeingPublished,

    /// The comment is already public.
    #[error("comment was already published")]
    CommentWasAlreadyPublished,

    /// A DOI can only be assigned once.
    #[error("doi was already assigned")]
    DoiWasAlreadyAssigned,

    /// The comment cannot go live without a DOI.
    #[error("doi is not assigned")]
    DoiIsNotAssigned,
}
