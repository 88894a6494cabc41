//! Command validation for dataset reviews.

use super::commands::DatasetReviewCommand;
use super::errors::DatasetReviewError;
use super::events::{
    AnsweredIfTheDatasetFollowsFairAndCarePrinciples, AnsweredIfTheDatasetHasEnoughMetadata,
    AnsweredIfTheDatasetHasTrackedChanges, CompetingInterestsForDatasetReviewWereDeclared,
    DatasetReviewEvent, DatasetReviewWasAssignedADoi, DatasetReviewWasPublished,
    DatasetReviewWasStarted, PersonaForDatasetReviewWasChosen,
    PublicationOfDatasetReviewWasRequested, ZenodoRecordForDatasetReviewWasCreated,
};
use super::state::{DatasetReviewBeingPublished, DatasetReviewState};

/// Decides the single event a command produces against the current state.
///
/// # Errors
///
/// Returns a `DatasetReviewError` naming why the transition is illegal.
pub fn decide(
    state: &DatasetReviewState,
    command: &DatasetReviewCommand,
) -> Result<DatasetReviewEvent, DatasetReviewError> {
    use DatasetReviewCommand as C;
    use DatasetReviewEvent as E;

    match command {
        C::StartDatasetReview {
            author_id,
            dataset_id,
        } => match state {
            DatasetReviewState::NotStarted => {
                Ok(E::DatasetReviewWasStarted(DatasetReviewWasStarted {
                    author_id: author_id.clone(),
                    dataset_id: dataset_id.clone(),
                }))
            }
            _ => Err(DatasetReviewError::DatasetReviewWasAlreadyStarted),
        },
        C::AnswerIfTheDatasetFollowsFairAndCarePrinciples { answer } => {
            ensure_editable(state)?;
            Ok(E::AnsweredIfTheDatasetFollowsFairAndCarePrinciples(
                AnsweredIfTheDatasetFollowsFairAndCarePrinciples { answer: *answer },
            ))
        }
        C::AnswerIfTheDatasetHasEnoughMetadata { answer } => {
            ensure_editable(state)?;
            Ok(E::AnsweredIfTheDatasetHasEnoughMetadata(
                AnsweredIfTheDatasetHasEnoughMetadata { answer: *answer },
            ))
        }
        C::AnswerIfTheDatasetHasTrackedChanges { answer } => {
            ensure_editable(state)?;
            Ok(E::AnsweredIfTheDatasetHasTrackedChanges(
                AnsweredIfTheDatasetHasTrackedChanges { answer: *answer },
            ))
        }
        C::ChoosePersona { persona } => {
            ensure_editable(state)?;
            Ok(E::PersonaForDatasetReviewWasChosen(
                PersonaForDatasetReviewWasChosen { persona: *persona },
            ))
        }
        C::DeclareCompetingInterests {
            competing_interests,
        } => {
            ensure_editable(state)?;
            Ok(E::CompetingInterestsForDatasetReviewWereDeclared(
                CompetingInterestsForDatasetReviewWereDeclared {
                    competing_interests: competing_interests.clone(),
                },
            ))
        }
        C::PublishDatasetReview => match state {
            DatasetReviewState::NotStarted => {
                Err(DatasetReviewError::DatasetReviewHasNotBeenStarted)
            }
            DatasetReviewState::InProgress(_) => Err(DatasetReviewError::DatasetReviewIsIncomplete),
            DatasetReviewState::ReadyForPublishing(_) => {
                Ok(E::PublicationOfDatasetReviewWasRequested(
                    PublicationOfDatasetReviewWasRequested {},
                ))
            }
            DatasetReviewState::BeingPublished(_) => {
                Err(DatasetReviewError::DatasetReviewIsBeingPublished)
            }
            DatasetReviewState::Published(_) => {
                Err(DatasetReviewError::DatasetReviewHasBeenPublished)
            }
        },
        C::MarkRecordCreatedOnZenodo { record_id } => {
            let pending = ensure_publication_requested(state)?;
            if pending.zenodo_record_id.is_some() {
                return Err(DatasetReviewError::ZenodoRecordWasAlreadyCreated);
            }
            Ok(E::ZenodoRecordForDatasetReviewWasCreated(
                ZenodoRecordForDatasetReviewWasCreated {
                    record_id: *record_id,
                },
            ))
        }
        C::MarkDoiAsAssigned { doi } => {
            let pending = ensure_publication_requested(state)?;
            if pending.zenodo_record_id.is_none() {
                return Err(DatasetReviewError::ZenodoRecordHasNotBeenCreated);
            }
            if pending.doi.is_some() {
                return Err(DatasetReviewError::DoiWasAlreadyAssigned);
            }
            Ok(E::DatasetReviewWasAssignedADoi(
                DatasetReviewWasAssignedADoi { doi: doi.clone() },
            ))
        }
        C::MarkDatasetReviewAsPublished { publication_date } => {
            let pending = ensure_publication_requested(state)?;
            if pending.doi.is_none() {
                return Err(DatasetReviewError::DoiIsNotAssigned);
            }
            Ok(E::DatasetReviewWasPublished(DatasetReviewWasPublished {
                publication_date: *publication_date,
            }))
        }
    }
}

fn ensure_editable(state: &DatasetReviewState) -> Result<(), DatasetReviewError> {
    match state {
        DatasetReviewState::NotStarted => Err(DatasetReviewError::DatasetReviewHasNotBeenStarted),
        DatasetReviewState::InProgress(_) | DatasetReviewState::ReadyForPublishing(_) => Ok(()),
        DatasetReviewState::BeingPublished(_) => {
            Err(DatasetReviewError::DatasetReviewIsBeingPublished)
        }
        DatasetReviewState::Published(_) => Err(DatasetReviewError::DatasetReviewHasBeenPublished),
    }
}

fn ensure_publication_requested(
    state: &DatasetReviewState,
) -> Result<&DatasetReviewBeingPublished, DatasetReviewError> {
    match state {
        DatasetReviewState::NotStarted => Err(DatasetReviewError::DatasetReviewHasNotBeenStarted),
        DatasetReviewState::InProgress(_) | DatasetReviewState::ReadyForPublishing(_) => {
            Err(DatasetReviewError::PublicationOfDatasetReviewWasNotRequested)
        }
        DatasetReviewState::BeingPublished(pending) => Ok(pending),
        DatasetReviewState::Published(_) => Err(DatasetReviewError::DatasetReviewHasBeenPublished),
    }
}
