//! Domain events for the Comments context.

use prereview_core::event::DomainEvent;
use prereview_core::values::{CompetingInterests, Doi, Orcid, Persona};
use serde::{Deserialize, Serialize};

/// Emitted when an author starts a comment on a PREreview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentWasStarted {
    /// The author writing the comment.
    pub author_id: Orcid,
    /// The PREreview being commented on.
    pub prereview_id: u64,
}

/// Emitted when the comment text is entered or replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentWasEntered {
    /// The comment, as sanitized HTML.
    pub comment: String,
}

/// Emitted when the author chooses how they appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaForCommentWasChosen {
    /// The chosen persona.
    pub persona: Persona,
}

/// Emitted when the author declares their competing interests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetingInterestsForCommentWereDeclared {
    /// The declaration.
    pub competing_interests: CompetingInterests,
}

/// Emitted when the author agrees to the code of conduct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeOfConductForCommentWasAgreed {}

/// Emitted when the author is confirmed to have a verified email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistenceOfVerifiedEmailAddressForCommentWasConfirmed {}

/// Emitted when the author asks for the comment to be published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentPublicationWasRequested {}

/// Emitted when an external record with a DOI was created for the comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentWasAssignedADoi {
    /// The external record identifier.
    pub id: u64,
    /// The DOI assigned to the record.
    pub doi: Doi,
}

/// Emitted once the comment is public.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentWasPublished {}

/// Event type identifier for [`CommentWasStarted`].
pub const COMMENT_WAS_STARTED_EVENT_TYPE: &str = "comment.comment_was_started";

/// Event type identifier for [`CommentWasEntered`].
pub const COMMENT_WAS_ENTERED_EVENT_TYPE: &str = "comment.comment_was_entered";

/// Event type identifier for [`PersonaForCommentWasChosen`].
pub const PERSONA_FOR_COMMENT_WAS_CHOSEN_EVENT_TYPE: &str =
    "comment.persona_for_comment_was_chosen";

/// Event type identifier for [`CompetingInterestsForCommentWereDeclared`].
pub const COMPETING_INTERESTS_FOR_COMMENT_WERE_DECLARED_EVENT_TYPE: &str =
    "comment.competing_interests_for_comment_were_declared";

/// Event type identifier for [`CodeOfConductForCommentWasAgreed`].
pub const CODE_OF_CONDUCT_FOR_COMMENT_WAS_AGREED_EVENT_TYPE: &str =
    "comment.code_of_conduct_for_comment_was_agreed";

/// Event type identifier for
/// [`ExistenceOfVerifiedEmailAddressForCommentWasConfirmed`].
pub const EXISTENCE_OF_VERIFIED_EMAIL_ADDRESS_FOR_COMMENT_WAS_CONFIRMED_EVENT_TYPE: &str =
    "comment.existence_of_verified_email_address_for_comment_was_confirmed";

/// Event type identifier for [`CommentPublicationWasRequested`].
pub const COMMENT_PUBLICATION_WAS_REQUESTED_EVENT_TYPE: &str =
    "comment.comment_publication_was_requested";

/// Event type identifier for [`CommentWasAssignedADoi`].
pub const COMMENT_WAS_ASSIGNED_A_DOI_EVENT_TYPE: &str = "comment.comment_was_assigned_a_doi";

/// Event type identifier for [`CommentWasPublished`].
pub const COMMENT_WAS_PUBLISHED_EVENT_TYPE: &str = "comment.comment_was_published";

/// Event payload variants for the Comments context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommentEvent {
    /// A comment was started.
    CommentWasStarted(CommentWasStarted),
    /// Comment text was entered.
    CommentWasEntered(CommentWasEntered),
    /// A persona was chosen.
    PersonaForCommentWasChosen(PersonaForCommentWasChosen),
    /// Competing interests were declared.
    CompetingInterestsForCommentWereDeclared(CompetingInterestsForCommentWereDeclared),
    /// The code of conduct was agreed.
    CodeOfConductForCommentWasAgreed(CodeOfConductForCommentWasAgreed),
    /// A verified email address was confirmed.
    ExistenceOfVerifiedEmailAddressForCommentWasConfirmed(
        ExistenceOfVerifiedEmailAddressForCommentWasConfirmed,
    ),
    /// Publication was requested.
    CommentPublicationWasRequested(CommentPublicationWasRequested),
    /// A DOI was assigned.
    CommentWasAssignedADoi(CommentWasAssignedADoi),
    /// The comment was published.
    CommentWasPublished(CommentWasPublished),
}

impl DomainEvent for CommentEvent {
    fn event_type(&self) -> &'static str {
        match self {
            Self::CommentWasStarted(_) => COMMENT_WAS_STARTED_EVENT_TYPE,
            Self::CommentWasEntered(_) => COMMENT_WAS_ENTERED_EVENT_TYPE,
            Self::PersonaForCommentWasChosen(_) => PERSONA_FOR_COMMENT_WAS_CHOSEN_EVENT_TYPE,
            Self::CompetingInterestsForCommentWereDeclared(_) => {
                COMPETING_INTERESTS_FOR_COMMENT_WERE_DECLARED_EVENT_TYPE
            }
            Self::CodeOfConductForCommentWasAgreed(_) => {
                CODE_OF_CONDUCT_FOR_COMMENT_WAS_AGREED_EVENT_TYPE
            }
            Self::ExistenceOfVerifiedEmailAddressForCommentWasConfirmed(_) => {
                EXISTENCE_OF_VERIFIED_EMAIL_ADDRESS_FOR_COMMENT_WAS_CONFIRMED_EVENT_TYPE
            }
            Self::CommentPublicationWasRequested(_) => COMMENT_PUBLICATION_WAS_REQUESTED_EVENT_TYPE,
            Self::CommentWasAssignedADoi(_) => COMMENT_WAS_ASSIGNED_A_DOI_EVENT_TYPE,
            Self::CommentWasPublished(_) => COMMENT_WAS_PUBLISHED_EVENT_TYPE,
        }
    }
}
