//! Command validation for comments.

use super::commands::CommentCommand;
use super::errors::CommentError;
use super::events::{
    CodeOfConductForCommentWasAgreed, CommentEvent, CommentPublicationWasRequested,
    CommentWasAssignedADoi, CommentWasEntered, CommentWasPublished, CommentWasStarted,
    CompetingInterestsForCommentWereDeclared,
    ExistenceOfVerifiedEmailAddressForCommentWasConfirmed, PersonaForCommentWasChosen,
};
use super::state::{CommentBeingPublished, CommentState};

/// Decides the single event a command produces against the current state.
///
/// # Errors
///
/// Returns a `CommentError` naming why the transition is illegal.
pub fn decide(
    state: &CommentState,
    command: &CommentCommand,
) -> Result<CommentEvent, CommentError> {
    match command {
        CommentCommand::StartComment {
            author_id,
            prereview_id,
        } => match state {
            CommentState::NotStarted => Ok(CommentEvent::CommentWasStarted(CommentWasStarted {
                author_id: author_id.clone(),
                prereview_id: *prereview_id,
            })),
            _ => Err(CommentError::CommentWasAlreadyStarted),
        },
        CommentCommand::EnterComment { comment } => {
            ensure_editable(state)?;
            Ok(CommentEvent::CommentWasEntered(CommentWasEntered {
                comment: comment.clone(),
            }))
        }
        CommentCommand::ChoosePersona { persona } => {
            ensure_editable(state)?;
            Ok(CommentEvent::PersonaForCommentWasChosen(
                PersonaForCommentWasChosen { persona: *persona },
            ))
        }
        CommentCommand::DeclareCompetingInterests {
            competing_interests,
        } => {
            ensure_editable(state)?;
            Ok(CommentEvent::CompetingInterestsForCommentWereDeclared(
                CompetingInterestsForCommentWereDeclared {
                    competing_interests: competing_interests.clone(),
                },
            ))
        }
        CommentCommand::AgreeToCodeOfConduct => {
            ensure_editable(state)?;
            Ok(CommentEvent::CodeOfConductForCommentWasAgreed(
                CodeOfConductForCommentWasAgreed {},
            ))
        }
        CommentCommand::ConfirmExistenceOfVerifiedEmailAddress => {
            ensure_editable(state)?;
            Ok(
                CommentEvent::ExistenceOfVerifiedEmailAddressForCommentWasConfirmed(
                    ExistenceOfVerifiedEmailAddressForCommentWasConfirmed {},
                ),
            )
        }
        CommentCommand::PublishComment => match state {
            CommentState::NotStarted => Err(CommentError::CommentHasNotBeenStarted),
            CommentState::InProgress(_) => Err(CommentError::CommentIsIncomplete),
            CommentState::ReadyForPublishing(_) => Ok(
                CommentEvent::CommentPublicationWasRequested(CommentPublicationWasRequested {}),
            ),
            CommentState::BeingPublished(_) => Err(CommentError::CommentIsBeingPublished),
            CommentState::Published(_) => Err(CommentError::CommentWasAlreadyPublished),
        },
        CommentCommand::MarkDoiAsAssigned { id, doi } => {
            match ensure_publication_requested(state)? {
                CommentBeingPublished { record: None, .. } => Ok(
                    CommentEvent::CommentWasAssignedADoi(CommentWasAssignedADoi {
                        id: *id,
                        doi: doi.clone(),
                    }),
                ),
                CommentBeingPublished {
                    record: Some(_), ..
                } => Err(CommentError::DoiWasAlreadyAssigned),
            }
        }
        CommentCommand::MarkCommentAsPublished => match ensure_publication_requested(state)? {
            CommentBeingPublished { record: None, .. } => Err(CommentError::DoiIsNotAssigned),
            CommentBeingPublished {
                record: Some(_), ..
            } => Ok(CommentEvent::CommentWasPublished(CommentWasPublished {})),
        },
    }
}

fn ensure_editable(state: &CommentState) -> Result<(), CommentError> {
    match state {
        CommentState::NotStarted => Err(CommentError::CommentHasNotBeenStarted),
        CommentState::InProgress(_) | CommentState::ReadyForPublishing(_) => Ok(()),
        CommentState::BeingPublished(_) => Err(CommentError::CommentIsBeingPublished),
        CommentState::Published(_) => Err(CommentError::CommentWasAlreadyPublished),
    }
}

fn ensure_publication_requested(
    state: &CommentState,
) -> Result<&CommentBeingPublished, CommentError> {
    match state {
        CommentState::NotStarted => Err(CommentError::CommentHasNotBeenStarted),
        CommentState::InProgress(_) | CommentState::ReadyForPublishing(_) => {
            Err(CommentError::CommentPublicationWasNotRequested)
        }
        CommentState::BeingPublished(pending) => Ok(pending),
        CommentState::Published(_) => Err(CommentError::CommentWasAlreadyPublished),
    }
}

#[cfg(test)]
mod tests {
    use prereview_core::values::{CompetingInterests, Doi, Orcid, Persona};

    use super::decide;
    use crate::domain::commands::CommentCommand;
    use crate::domain::errors::CommentError;
    use crate::domain::events::CommentEvent;
    use crate::domain::state::{CommentState, evolve};

    fn start() -> CommentCommand {
        CommentCommand::StartComment {
            author_id: Orcid::new("0000-0002-1825-0097"),
            prereview_id: 123,
        }
    }

    fn edits() -> Vec<CommentCommand> {
        vec![
            CommentCommand::EnterComment {
                comment: "<p>Interesting.</p>".into(),
            },
            CommentCommand::ChoosePersona {
                persona: Persona::Pseudonym,
            },
            CommentCommand::DeclareCompetingInterests {
                competing_interests: CompetingInterests::None,
            },
            CommentCommand::AgreeToCodeOfConduct,
            CommentCommand::ConfirmExistenceOfVerifiedEmailAddress,
        ]
    }

    fn assign_doi() -> CommentCommand {
        CommentCommand::MarkDoiAsAssigned {
            id: 42,
            doi: Doi::new("10.5072/zenodo.42"),
        }
    }

    fn run(state: CommentState, commands: &[CommentCommand]) -> CommentState {
        commands.iter().fold(state, |state, command| {
            let event = decide(&state, command).unwrap();
            evolve(state, &event)
        })
    }

    fn in_progress() -> CommentState {
        run(CommentState::NotStarted, &[start()])
    }

    fn ready() -> CommentState {
        run(in_progress(), &edits())
    }

    fn being_published() -> CommentState {
        run(ready(), &[CommentCommand::PublishComment])
    }

    fn doi_assigned() -> CommentState {
        run(being_published(), &[assign_doi()])
    }

    fn published() -> CommentState {
        run(doi_assigned(), &[CommentCommand::MarkCommentAsPublished])
    }

    #[test]
    fn test_full_lifecycle_reaches_published() {
        assert!(matches!(ready(), CommentState::ReadyForPublishing(_)));
        assert!(matches!(published(), CommentState::Published(_)));
    }

    #[test]
    fn test_second_start_is_rejected() {
        assert_eq!(
            decide(&in_progress(), &start()),
            Err(CommentError::CommentWasAlreadyStarted)
        );
    }

    #[test]
    fn test_edits_follow_the_lifecycle() {
        for command in edits() {
            assert_eq!(
                decide(&CommentState::NotStarted, &command),
                Err(CommentError::CommentHasNotBeenStarted)
            );
            assert!(decide(&ready(), &command).is_ok());
            assert_eq!(
                decide(&being_published(), &command),
                Err(CommentError::CommentIsBeingPublished)
            );
            assert_eq!(
                decide(&published(), &command),
                Err(CommentError::CommentWasAlreadyPublished)
            );
        }
    }

    #[test]
    fn test_incomplete_comment_cannot_be_published() {
        assert_eq!(
            decide(&in_progress(), &CommentCommand::PublishComment),
            Err(CommentError::CommentIsIncomplete)
        );
    }

    #[test]
    fn test_doi_must_be_assigned_exactly_once_before_publishing() {
        assert_eq!(
            decide(&ready(), &assign_doi()),
            Err(CommentError::CommentPublicationWasNotRequested)
        );
        assert_eq!(
            decide(&being_published(), &CommentCommand::MarkCommentAsPublished),
            Err(CommentError::DoiIsNotAssigned)
        );
        assert!(matches!(
            decide(&being_published(), &assign_doi()),
            Ok(CommentEvent::CommentWasAssignedADoi(_))
        ));
        assert_eq!(
            decide(&doi_assigned(), &assign_doi()),
            Err(CommentError::DoiWasAlreadyAssigned)
        );
        assert_eq!(
            decide(&published(), &CommentCommand::MarkCommentAsPublished),
            Err(CommentError::CommentWasAlreadyPublished)
        );
    }

    #[test]
    fn test_every_accepted_event_keeps_lifecycle_order() {
        fn rank(state: &CommentState) -> u8 {
            match state {
                CommentState::NotStarted => 0,
                CommentState::InProgress(_) => 1,
                CommentState::ReadyForPublishing(_) => 2,
                CommentState::BeingPublished(pending) if pending.record.is_none() => 3,
                CommentState::BeingPublished(_) => 4,
                CommentState::Published(_) => 5,
            }
        }

        let mut states = vec![CommentState::NotStarted];
        states.extend((0..edits().len()).map(|n| run(in_progress(), &edits()[..n])));
        states.extend([ready(), being_published(), doi_assigned(), published()]);

        let mut commands = vec![start()];
        commands.extend(edits());
        commands.extend([
            CommentCommand::PublishComment,
            assign_doi(),
            CommentCommand::MarkCommentAsPublished,
        ]);

        for state in &states {
            for command in &commands {
                if let Ok(event) = decide(state, command) {
                    let next = evolve(state.clone(), &event);
                    assert!(rank(&next) >= rank(state), "{command:?} regressed {state:?}");
                    assert!(rank(&next) <= rank(state) + 1, "{command:?} skipped from {state:?}");
                }
            }
        }
    }
}
