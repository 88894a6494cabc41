//! Reasons a dataset review command is refused.

use thiserror::Error;

/// Domain errors for the Dataset Reviews context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetReviewError {
    /// The review has already been started.
    #[error("dataset review was already started")]
    DatasetReviewWasAlreadyStarted,

    /// The command needs a review that has been started.
    #[error("dataset review has not been started")]
    DatasetReviewHasNotBeenStarted,

    /// Publication needs every required answer.
    #[error("dataset review is incomplete")]
    DatasetReviewIsIncomplete,

    /// The review is locked while it is being published.
    #[error("dataset review is being published")]
    DatasetReviewIsBeingPublished,

    /// The review is already public.
    #[error("dataset review has been published")]
    DatasetReviewHasBeenPublished,

    /// Publishing steps need a prior publication request.
    #[error("publication of dataset review was not requested")]
    PublicationOfDatasetReviewWasNotRequested,

    /// A Zenodo record can only be created once.
    #[error("zenodo record was already created")]
    ZenodoRecordWasAlreadyCreated,

    /// A DOI needs a Zenodo record first.
    #[error("zenodo record has not been created")]
    ZenodoRecordHasNotBeenCreated,

    /// A DOI can only be assigned once.
    #[error("doi was already assigned")]
    DoiWasAlreadyAssigned,

    /// The review cannot go live without a DOI.
    #[error("doi is not assigned")]
    DoiIsNotAssigned,
}
