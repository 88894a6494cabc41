//! Comment state and its evolution.

use prereview_core::values::{CompetingInterests, Doi, Orcid, Persona};
use serde::Serialize;

use super::events::CommentEvent;

/// Derived state of one comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CommentState {
    /// No events yet.
    NotStarted,
    /// Started, still missing required fields.
    InProgress(CommentInProgress),
    /// Every required field is present.
    ReadyForPublishing(CommentReadyForPublishing),
    /// Publication was requested; a DOI may or may not be assigned yet.
    BeingPublished(CommentBeingPublished),
    /// Public.
    Published(CommentPublished),
}

/// A comment being written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentInProgress {
    /// The author writing the comment.
    pub author_id: Orcid,
    /// The PREreview being commented on.
    pub prereview_id: u64,
    /// The comment text, once entered.
    pub comment: Option<String>,
    /// The chosen persona, once chosen.
    pub persona: Option<Persona>,
    /// The competing-interests declaration, once made.
    pub competing_interests: Option<CompetingInterests>,
    /// Whether the code of conduct was agreed.
    pub code_of_conduct_agreed: bool,
    /// Whether the author has a verified email address.
    pub verified_email_address_exists: bool,
}

/// The fields every comment past the drafting stage carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentReadyForPublishing {
    /// The author of the comment.
    pub author_id: Orcid,
    /// The PREreview being commented on.
    pub prereview_id: u64,
    /// The comment text.
    pub comment: String,
    /// The chosen persona.
    pub persona: Persona,
    /// The competing-interests declaration.
    pub competing_interests: CompetingInterests,
}

/// The external record created for a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentRecord {
    /// The external record identifier.
    pub id: u64,
    /// The DOI assigned to the record.
    pub doi: Doi,
}

/// A comment whose publication was requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentBeingPublished {
    /// The completed comment.
    #[serde(flatten)]
    pub comment: CommentReadyForPublishing,
    /// The assigned record, once a DOI exists.
    pub record: Option<CommentRecord>,
}

/// A public comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentPublished {
    /// The completed comment.
    #[serde(flatten)]
    pub comment: CommentReadyForPublishing,
    /// The record it was published under.
    pub record: CommentRecord,
}

impl CommentState {
    /// The author, for any started comment.
    #[must_use]
    pub fn author_id(&self) -> Option<&Orcid> {
        match self {
            Self::NotStarted => None,
            Self::InProgress(s) => Some(&s.author_id),
            Self::ReadyForPublishing(s) => Some(&s.author_id),
            Self::BeingPublished(s) => Some(&s.comment.author_id),
            Self::Published(s) => Some(&s.comment.author_id),
        }
    }
}

impl CommentInProgress {
    fn apply(mut self, event: &CommentEvent) -> CommentState {
        match event {
            CommentEvent::CommentWasEntered(e) => self.comment = Some(e.comment.clone()),
            CommentEvent::PersonaForCommentWasChosen(e) => self.persona = Some(e.persona),
            CommentEvent::CompetingInterestsForCommentWereDeclared(e) => {
                self.competing_interests = Some(e.competing_interests.clone());
            }
            CommentEvent::CodeOfConductForCommentWasAgreed(_) => {
                self.code_of_conduct_agreed = true;
            }
            CommentEvent::ExistenceOfVerifiedEmailAddressForCommentWasConfirmed(_) => {
                self.verified_email_address_exists = true;
            }
            CommentEvent::CommentWasStarted(_)
            | CommentEvent::CommentPublicationWasRequested(_)
            | CommentEvent::CommentWasAssignedADoi(_)
            | CommentEvent::CommentWasPublished(_) => {}
        }
        self.promote()
    }

    fn promote(self) -> CommentState {
        match self {
            Self {
                author_id,
                prereview_id,
                comment: Some(comment),
                persona: Some(persona),
                competing_interests: Some(competing_interests),
                code_of_conduct_agreed: true,
                verified_email_address_exists: true,
            } => CommentState::ReadyForPublishing(CommentReadyForPublishing {
                author_id,
                prereview_id,
                comment,
                persona,
                competing_interests,
            }),
            draft => CommentState::InProgress(draft),
        }
    }
}

impl From<CommentReadyForPublishing> for CommentInProgress {
    fn from(ready: CommentReadyForPublishing) -> Self {
        Self {
            author_id: ready.author_id,
            prereview_id: ready.prereview_id,
            comment: Some(ready.comment),
            persona: Some(ready.persona),
            competing_interests: Some(ready.competing_interests),
            code_of_conduct_agreed: true,
            verified_email_address_exists: true,
        }
    }
}

/// Applies one event to a comment state.
#[must_use]
pub fn evolve(state: CommentState, event: &CommentEvent) -> CommentState {
    match (state, event) {
        (CommentState::NotStarted, CommentEvent::CommentWasStarted(started)) => {
            CommentState::InProgress(CommentInProgress {
                author_id: started.author_id.clone(),
                prereview_id: started.prereview_id,
                comment: None,
                persona: None,
                competing_interests: None,
                code_of_conduct_agreed: false,
                verified_email_address_exists: false,
            })
        }
        (CommentState::InProgress(draft), event) => draft.apply(event),
        (
            CommentState::ReadyForPublishing(ready),
            CommentEvent::CommentPublicationWasRequested(_),
        ) => CommentState::BeingPublished(CommentBeingPublished {
            comment: ready,
            record: None,
        }),
        (CommentState::ReadyForPublishing(ready), event) => {
            CommentInProgress::from(ready).apply(event)
        }
        (
            CommentState::BeingPublished(CommentBeingPublished {
                comment,
                record: None,
            }),
            CommentEvent::CommentWasAssignedADoi(assigned),
        ) => CommentState::BeingPublished(CommentBeingPublished {
            comment,
            record: Some(CommentRecord {
                id: assigned.id,
                doi: assigned.doi.clone(),
            }),
        }),
        (
            CommentState::BeingPublished(CommentBeingPublished {
                comment,
                record: Some(record),
            }),
            CommentEvent::CommentWasPublished(_),
        ) => CommentState::Published(CommentPublished { comment, record }),
        (state, _) => state,
    }
}
