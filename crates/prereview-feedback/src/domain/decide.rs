//! Command validation for feedback.

use super::commands::FeedbackCommand;
use super::errors::FeedbackError;
use super::events::{
    CodeOfConductWasAgreed, FeedbackEvent, FeedbackPublicationWasRequested, FeedbackWasEntered,
    FeedbackWasPublished, FeedbackWasStarted, PersonaWasChosen,
};
use super::state::FeedbackState;

/// Decides the single event a command produces against the current state.
///
/// # Errors
///
/// Returns a `FeedbackError` naming why the transition is illegal.
pub fn decide(
    state: &FeedbackState,
    command: &FeedbackCommand,
) -> Result<FeedbackEvent, FeedbackError> {
    match command {
        FeedbackCommand::StartFeedback {
            author_id,
            prereview_id,
        } => match state {
            FeedbackState::NotStarted => Ok(FeedbackEvent::FeedbackWasStarted(FeedbackWasStarted {
                author_id: author_id.clone(),
                prereview_id: *prereview_id,
            })),
            _ => Err(FeedbackError::FeedbackWasAlreadyStarted),
        },
        FeedbackCommand::EnterFeedback { feedback } => {
            ensure_editable(state)?;
            Ok(FeedbackEvent::FeedbackWasEntered(FeedbackWasEntered {
                feedback: feedback.clone(),
            }))
        }
        FeedbackCommand::ChoosePersona { persona } => {
            ensure_editable(state)?;
            Ok(FeedbackEvent::PersonaWasChosen(PersonaWasChosen {
                persona: *persona,
            }))
        }
        FeedbackCommand::AgreeToCodeOfConduct => {
            ensure_editable(state)?;
            Ok(FeedbackEvent::CodeOfConductWasAgreed(CodeOfConductWasAgreed {}))
        }
        FeedbackCommand::PublishFeedback => match state {
            FeedbackState::NotStarted => Err(FeedbackError::FeedbackHasNotBeenStarted),
            FeedbackState::InProgress(_) => Err(FeedbackError::FeedbackIsIncomplete),
            FeedbackState::ReadyForPublishing(_) => Ok(
                FeedbackEvent::FeedbackPublicationWasRequested(FeedbackPublicationWasRequested {}),
            ),
            FeedbackState::BeingPublished(_) => Err(FeedbackError::FeedbackIsBeingPublished),
            FeedbackState::Published(_) => Err(FeedbackError::FeedbackWasAlreadyPublished),
        },
        FeedbackCommand::MarkFeedbackAsPublished { id, doi } => match state {
            FeedbackState::NotStarted => Err(FeedbackError::FeedbackHasNotBeenStarted),
            FeedbackState::InProgress(_) | FeedbackState::ReadyForPublishing(_) => {
                Err(FeedbackError::FeedbackPublicationWasNotRequested)
            }
            FeedbackState::BeingPublished(_) => {
                Ok(FeedbackEvent::FeedbackWasPublished(FeedbackWasPublished {
                    id: *id,
                    doi: doi.clone(),
                }))
            }
            FeedbackState::Published(_) => Err(FeedbackError::FeedbackWasAlreadyPublished),
        },
    }
}

fn ensure_editable(state: &FeedbackState) -> Result<(), FeedbackError> {
    match state {
        FeedbackState::NotStarted => Err(FeedbackError::FeedbackHasNotBeenStarted),
        FeedbackState::InProgress(_) | FeedbackState::ReadyForPublishing(_) => Ok(()),
        FeedbackState::BeingPublished(_) => Err(FeedbackError::FeedbackIsBeingPublished),
        FeedbackState::Published(_) => Err(FeedbackError::FeedbackWasAlreadyPublished),
    }
}
