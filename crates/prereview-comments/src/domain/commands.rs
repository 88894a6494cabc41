//! Commands for the Comments context.

use prereview_core::command::Command;
use prereview_core::values::{CompetingInterests, Doi, Orcid, Persona};
use serde::Deserialize;

/// Intents accepted by a comment resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CommentCommand {
    /// Start a comment on a PREreview.
    StartComment {
        /// The author writing the comment.
        author_id: Orcid,
        /// The PREreview being commented on.
        prereview_id: u64,
    },
    /// Enter or replace the comment text.
    EnterComment {
        /// The comment, as sanitized HTML.
        comment: String,
    },
    /// Choose how the author appears.
    ChoosePersona {
        /// The chosen persona.
        persona: Persona,
    },
    /// Declare competing interests.
    DeclareCompetingInterests {
        /// The declaration.
        competing_interests: CompetingInterests,
    },
    /// Agree to the code of conduct.
    AgreeToCodeOfConduct,
    /// Confirm that the author has a verified email address.
    ConfirmExistenceOfVerifiedEmailAddress,
    /// Request publication of a complete comment.
    PublishComment,
    /// Record the DOI of the comment's external record.
    MarkDoiAsAssigned {
        /// The external record identifier.
        id: u64,
        /// The DOI assigned to the record.
        doi: Doi,
    },
    /// Record that the comment is now public.
    MarkCommentAsPublished,
}

impl Command for CommentCommand {
    fn command_type(&self) -> &'static str {
        match self {
            Self::StartComment { .. } => "comment.start_comment",
            Self::EnterComment { .. } => "comment.enter_comment",
            Self::ChoosePersona { .. } => "comment.choose_persona",
            Self::DeclareCompetingInterests { .. } => "comment.declare_competing_interests",
            Self::AgreeToCodeOfConduct => "comment.agree_to_code_of_conduct",
            Self::ConfirmExistenceOfVerifiedEmailAddress => {
                "comment.confirm_existence_of_verified_email_address"
            }
            Self::PublishComment => "comment.publish_comment",
            Self::MarkDoiAsAssigned { .. } => "comment.mark_doi_as_assigned",
            Self::MarkCommentAsPublished => "comment.mark_comment_as_published",
        }
    }
}
