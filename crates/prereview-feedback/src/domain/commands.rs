//! Commands for the Feedback context.

use prereview_core::command::Command;
use prereview_core::values::{Doi, Orcid, Persona};
use serde::Deserialize;

/// Intents accepted by a feedback resource. Identifiers are assigned by the
/// caller before the command is issued.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeedbackCommand {
    /// Start feedback on a PREreview.
    StartFeedback {
        /// The author writing the feedback.
        author_id: Orcid,
        /// The PREreview the feedback is about.
        prereview_id: u64,
    },
    /// Enter or replace the feedback text.
    EnterFeedback {
        /// The feedback, as sanitized HTML.
        feedback: String,
    },
    /// Choose how the author appears.
    ChoosePersona {
        /// The chosen persona.
        persona: Persona,
    },
    /// Agree to the code of conduct.
    AgreeToCodeOfConduct,
    /// Request publication of complete feedback.
    PublishFeedback,
    /// Record that the feedback now has a public record.
    MarkFeedbackAsPublished {
        /// The external record identifier.
        id: u64,
        /// The DOI assigned to the record.
        doi: Doi,
    },
}

impl Command for FeedbackCommand {
    fn command_type(&self) -> &'static str {
        match self {
            Self::StartFeedback { .. } => "feedback.start_feedback",
            Self::EnterFeedback { .. } => "feedback.enter_feedback",
            Self::ChoosePersona { .. } => "feedback.choose_persona",
            Self::AgreeToCodeOfConduct => "feedback.agree_to_code_of_conduct",
            Self::PublishFeedback => "feedback.publish_feedback",
            Self::MarkFeedbackAsPublished { .. } => "feedback.mark_feedback_as_published",
        }
    }
}
