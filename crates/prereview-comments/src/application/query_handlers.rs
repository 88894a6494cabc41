//! Query handlers for the Comments context.

use std::collections::HashMap;

use prereview_core::command::load_state;
use prereview_core::error::QueryError;
use prereview_core::projection::{fold_resources, load_all_events};
use prereview_core::repository::EventRepository;
use prereview_core::values::Orcid;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::aggregates::Comment;
use crate::domain::events::CommentEvent;
use crate::domain::state::{CommentInProgress, CommentState};

/// Read-only view of one comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentView {
    /// The comment identifier.
    pub comment_id: Uuid,
    /// Number of events folded into `state`.
    pub version: i64,
    /// Current state.
    pub state: CommentState,
}

/// What a user is expected to do next with their comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NextExpectedCommand {
    /// There is no unfinished comment; a new one may be started.
    ExpectedToStartAComment,
    /// The comment text is missing.
    ExpectedToEnterAComment {
        /// The comment concerned.
        comment_id: Uuid,
    },
    /// No persona has been chosen.
    ExpectedToChooseAPersona {
        /// The comment concerned.
        comment_id: Uuid,
    },
    /// Competing interests have not been declared.
    ExpectedToDeclareCompetingInterests {
        /// The comment concerned.
        comment_id: Uuid,
    },
    /// The code of conduct has not been agreed.
    ExpectedToAgreeToCodeOfConduct {
        /// The comment concerned.
        comment_id: Uuid,
    },
    /// The author's email address is not verified yet.
    ExpectedToVerifyEmailAddress {
        /// The comment concerned.
        comment_id: Uuid,
    },
    /// Everything is in place; publication can be requested.
    ExpectedToPublishComment {
        /// The comment concerned.
        comment_id: Uuid,
    },
    /// Publication was requested; nothing is expected from the user.
    CommentIsBeingPublished {
        /// The comment concerned.
        comment_id: Uuid,
    },
    /// The comment is public; nothing is expected from the user.
    CommentWasAlreadyPublished {
        /// The comment concerned.
        comment_id: Uuid,
    },
}

impl NextExpectedCommand {
    /// Derives the next step from a comment's state.
    #[must_use]
    pub fn for_comment(comment_id: Uuid, state: &CommentState) -> Self {
        match state {
            CommentState::NotStarted => Self::ExpectedToStartAComment,
            CommentState::InProgress(draft) => Self::for_draft(comment_id, draft),
            CommentState::ReadyForPublishing(_) => Self::ExpectedToPublishComment { comment_id },
            CommentState::BeingPublished(_) => Self::CommentIsBeingPublished { comment_id },
            CommentState::Published(_) => Self::CommentWasAlreadyPublished { comment_id },
        }
    }

    fn for_draft(comment_id: Uuid, draft: &CommentInProgress) -> Self {
        if draft.comment.is_none() {
            Self::ExpectedToEnterAComment { comment_id }
        } else if draft.persona.is_none() {
            Self::ExpectedToChooseAPersona { comment_id }
        } else if draft.competing_interests.is_none() {
            Self::ExpectedToDeclareCompetingInterests { comment_id }
        } else if !draft.code_of_conduct_agreed {
            Self::ExpectedToAgreeToCodeOfConduct { comment_id }
        } else if !draft.verified_email_address_exists {
            Self::ExpectedToVerifyEmailAddress { comment_id }
        } else {
            Self::ExpectedToPublishComment { comment_id }
        }
    }
}

/// Retrieves the current state of one comment. Unknown ids are
/// `NotStarted` at version 0.
///
/// # Errors
///
/// Returns `QueryError` if the history cannot be loaded or decoded.
pub async fn get_comment(
    comment_id: Uuid,
    repo: &dyn EventRepository,
) -> Result<CommentView, QueryError> {
    let (state, version) = load_state::<Comment>(comment_id, repo).await?;
    Ok(CommentView {
        comment_id,
        version,
        state,
    })
}

/// What the author should do next with their comment on a PREreview.
///
/// Comments that are being published or are public are finished from the
/// author's point of view. When several unfinished comments exist, the one
/// started last wins.
///
/// # Errors
///
/// Returns `QueryError` if the log cannot be loaded or decoded.
pub async fn get_next_expected_command_for_user(
    author_id: &Orcid,
    prereview_id: u64,
    repo: &dyn EventRepository,
) -> Result<NextExpectedCommand, QueryError> {
    let events = load_all_events::<Comment>(repo).await?;
    let comments = fold_resources::<Comment, _>(&events, |event| {
        matches!(
            event,
            CommentEvent::CommentWasStarted(started)
                if started.author_id == *author_id && started.prereview_id == prereview_id
        )
    });

    let unfinished = comments.iter().rev().find(|(_, state)| {
        matches!(
            state,
            CommentState::InProgress(_) | CommentState::ReadyForPublishing(_)
        )
    });

    Ok(match unfinished {
        Some((comment_id, state)) => NextExpectedCommand::for_comment(*comment_id, state),
        None => NextExpectedCommand::ExpectedToStartAComment,
    })
}

/// What should happen next to one comment.
///
/// # Errors
///
/// Returns `QueryError` if the history cannot be loaded or decoded.
pub async fn get_next_expected_command_for_user_on_a_comment(
    comment_id: Uuid,
    repo: &dyn EventRepository,
) -> Result<NextExpectedCommand, QueryError> {
    let (state, _) = load_state::<Comment>(comment_id, repo).await?;
    Ok(NextExpectedCommand::for_comment(comment_id, &state))
}

/// Finds the comment that has waited longest for a DOI: the earliest
/// publication request whose comment still has no DOI.
///
/// # Errors
///
/// Returns `QueryError` if the log cannot be loaded or decoded.
pub async fn get_a_comment_in_need_of_a_doi(
    repo: &dyn EventRepository,
) -> Result<Option<Uuid>, QueryError> {
    let events = load_all_events::<Comment>(repo).await?;
    let states: HashMap<Uuid, CommentState> =
        fold_resources::<Comment, _>(&events, |event| {
            matches!(event, CommentEvent::CommentWasStarted(_))
        })
        .into_iter()
        .collect();

    Ok(events
        .iter()
        .filter(|entry| matches!(entry.event, CommentEvent::CommentPublicationWasRequested(_)))
        .map(|entry| entry.resource_id)
        .find(|comment_id| {
            matches!(
                states.get(comment_id),
                Some(CommentState::BeingPublished(pending)) if pending.record.is_none()
            )
        }))
}

#[cfg(test)]
mod tests {
    use prereview_core::values::{CompetingInterests, Doi, Orcid, Persona};
    use prereview_test_support::{RecordingEventRepository, stored_history};
    use uuid::Uuid;

    use super::{
        NextExpectedCommand, get_a_comment_in_need_of_a_doi, get_comment,
        get_next_expected_command_for_user, get_next_expected_command_for_user_on_a_comment,
    };
    use crate::domain::aggregates::Comment;
    use crate::domain::events::{
        CodeOfConductForCommentWasAgreed, CommentEvent, CommentPublicationWasRequested,
        CommentWasAssignedADoi, CommentWasEntered, CommentWasPublished, CommentWasStarted,
        CompetingInterestsForCommentWereDeclared,
        ExistenceOfVerifiedEmailAddressForCommentWasConfirmed, PersonaForCommentWasChosen,
    };
    use crate::domain::state::CommentState;

    fn author() -> Orcid {
        Orcid::new("0000-0002-1825-0097")
    }

    fn started(author_id: Orcid) -> CommentEvent {
        CommentEvent::CommentWasStarted(CommentWasStarted {
            author_id,
            prereview_id: 123,
        })
    }

    fn entered() -> CommentEvent {
        CommentEvent::CommentWasEntered(CommentWasEntered {
            comment: "<p>Interesting.</p>".into(),
        })
    }

    fn persona_chosen() -> CommentEvent {
        CommentEvent::PersonaForCommentWasChosen(PersonaForCommentWasChosen {
            persona: Persona::Public,
        })
    }

    fn declared() -> CommentEvent {
        CommentEvent::CompetingInterestsForCommentWereDeclared(
            CompetingInterestsForCommentWereDeclared {
                competing_interests: CompetingInterests::None,
            },
        )
    }

    fn agreed() -> CommentEvent {
        CommentEvent::CodeOfConductForCommentWasAgreed(CodeOfConductForCommentWasAgreed {})
    }

    fn verified() -> CommentEvent {
        CommentEvent::ExistenceOfVerifiedEmailAddressForCommentWasConfirmed(
            ExistenceOfVerifiedEmailAddressForCommentWasConfirmed {},
        )
    }

    fn requested() -> CommentEvent {
        CommentEvent::CommentPublicationWasRequested(CommentPublicationWasRequested {})
    }

    fn assigned(id: u64) -> CommentEvent {
        CommentEvent::CommentWasAssignedADoi(CommentWasAssignedADoi {
            id,
            doi: Doi::new(format!("10.5072/zenodo.{id}")),
        })
    }

    fn complete(comment_id: Uuid) -> Vec<(Uuid, CommentEvent)> {
        [started(author()), entered(), persona_chosen(), declared(), agreed(), verified()]
            .into_iter()
            .map(|event| (comment_id, event))
            .collect()
    }

    #[tokio::test]
    async fn test_get_comment_reports_state_and_version() {
        let comment_id = Uuid::new_v4();
        let repo = RecordingEventRepository::new(stored_history::<Comment>(&complete(comment_id)));

        let view = get_comment(comment_id, &repo).await.unwrap();

        assert_eq!(view.version, 6);
        assert!(matches!(view.state, CommentState::ReadyForPublishing(_)));
    }

    #[tokio::test]
    async fn test_next_expected_command_walks_the_required_fields_in_order() {
        // Arrange
        let comment_id = Uuid::new_v4();
        let all = complete(comment_id);

        // Act
        let mut steps = Vec::new();
        for len in 1..=all.len() {
            let repo = RecordingEventRepository::new(stored_history::<Comment>(&all[..len]));
            steps.push(
                get_next_expected_command_for_user_on_a_comment(comment_id, &repo)
                    .await
                    .unwrap(),
            );
        }

        // Assert
        assert_eq!(
            steps,
            vec![
                NextExpectedCommand::ExpectedToEnterAComment { comment_id },
                NextExpectedCommand::ExpectedToChooseAPersona { comment_id },
                NextExpectedCommand::ExpectedToDeclareCompetingInterests { comment_id },
                NextExpectedCommand::ExpectedToAgreeToCodeOfConduct { comment_id },
                NextExpectedCommand::ExpectedToVerifyEmailAddress { comment_id },
                NextExpectedCommand::ExpectedToPublishComment { comment_id },
            ]
        );
    }

    #[tokio::test]
    async fn test_user_with_only_finished_comments_is_expected_to_start_one() {
        // Arrange
        let finished = Uuid::new_v4();
        let mut log = complete(finished);
        log.push((finished, requested()));
        let repo = RecordingEventRepository::new(stored_history::<Comment>(&log));

        // Act
        let next = get_next_expected_command_for_user(&author(), 123, &repo)
            .await
            .unwrap();
        let on_comment = get_next_expected_command_for_user_on_a_comment(finished, &repo)
            .await
            .unwrap();

        // Assert
        assert_eq!(next, NextExpectedCommand::ExpectedToStartAComment);
        assert_eq!(
            on_comment,
            NextExpectedCommand::CommentIsBeingPublished {
                comment_id: finished
            }
        );
    }

    #[tokio::test]
    async fn test_user_query_ignores_other_authors_and_picks_latest_draft() {
        // Arrange
        let older = Uuid::new_v4();
        let newer = Uuid::new_v4();
        let theirs = Uuid::new_v4();
        let log = vec![
            (older, started(author())),
            (older, entered()),
            (theirs, started(Orcid::new("0000-0003-4321-1234"))),
            (newer, started(author())),
        ];
        let repo = RecordingEventRepository::new(stored_history::<Comment>(&log));

        // Act
        let next = get_next_expected_command_for_user(&author(), 123, &repo)
            .await
            .unwrap();

        // Assert
        assert_eq!(
            next,
            NextExpectedCommand::ExpectedToEnterAComment { comment_id: newer }
        );
    }

    #[tokio::test]
    async fn test_comment_in_need_of_a_doi_is_the_oldest_request_without_one() {
        // Arrange: A requested first and got a DOI, B requested next, C last.
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();
        let mut log = Vec::new();
        for id in [a, b, c] {
            log.extend(complete(id));
        }
        log.push((a, requested()));
        log.push((b, requested()));
        log.push((c, requested()));
        log.push((a, assigned(1)));
        let repo = RecordingEventRepository::new(stored_history::<Comment>(&log));

        // Act
        let in_need = get_a_comment_in_need_of_a_doi(&repo).await.unwrap();

        // Assert
        assert_eq!(in_need, Some(b));
    }

    #[tokio::test]
    async fn test_no_comment_needs_a_doi_once_all_are_published() {
        let a = Uuid::new_v4();
        let mut log = complete(a);
        log.push((a, requested()));
        log.push((a, assigned(1)));
        log.push((a, CommentEvent::CommentWasPublished(CommentWasPublished {})));
        let repo = RecordingEventRepository::new(stored_history::<Comment>(&log));

        let in_need = get_a_comment_in_need_of_a_doi(&repo).await.unwrap();

        assert_eq!(in_need, None);
    }
}
