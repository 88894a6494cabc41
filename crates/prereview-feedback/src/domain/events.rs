//! Domain events for the Feedback context.

use prereview_core::event::DomainEvent;
use prereview_core::values::{Doi, Orcid, Persona};
use serde::{Deserialize, Serialize};

/// Emitted when an author starts writing feedback on a PREreview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackWasStarted {
    /// The author writing the feedback.
    pub author_id: Orcid,
    /// The PREreview the feedback is about.
    pub prereview_id: u64,
}

/// Emitted when the feedback text is entered or replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackWasEntered {
    /// The feedback, as sanitized HTML.
    pub feedback: String,
}

/// Emitted when the author chooses how they appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaWasChosen {
    /// The chosen persona.
    pub persona: Persona,
}

/// Emitted when the author agrees to the code of conduct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeOfConductWasAgreed {}

/// Emitted when the author asks for the feedback to be published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackPublicationWasRequested {}

/// Emitted once the feedback has a public record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackWasPublished {
    /// The external record identifier.
    pub id: u64,
    /// The DOI assigned to the record.
    pub doi: Doi,
}

/// Event type identifier for [`FeedbackWasStarted`].
pub const FEEDBACK_WAS_STARTED_EVENT_TYPE: &str = "feedback.feedback_was_started";

/// Event type identifier for [`FeedbackWasEntered`].
pub const FEEDBACK_WAS_ENTERED_EVENT_TYPE: &str = "feedback.feedback_was_entered";

/// Event type identifier for [`PersonaWasChosen`].
pub const PERSONA_WAS_CHOSEN_EVENT_TYPE: &str = "feedback.persona_was_chosen";

/// Event type identifier for [`CodeOfConductWasAgreed`].
pub const CODE_OF_CONDUCT_WAS_AGREED_EVENT_TYPE: &str = "feedback.code_of_conduct_was_agreed";

/// Event type identifier for [`FeedbackPublicationWasRequested`].
pub const FEEDBACK_PUBLICATION_WAS_REQUESTED_EVENT_TYPE: &str =
    "feedback.feedback_publication_was_requested";

/// Event type identifier for [`FeedbackWasPublished`].
pub const FEEDBACK_WAS_PUBLISHED_EVENT_TYPE: &str = "feedback.feedback_was_published";

/// Event payload variants for the Feedback context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackEvent {
    /// Feedback was started.
    FeedbackWasStarted(FeedbackWasStarted),
    /// Feedback text was entered.
    FeedbackWasEntered(FeedbackWasEntered),
    /// A persona was chosen.
    PersonaWasChosen(PersonaWasChosen),
    /// The code of conduct was agreed.
    CodeOfConductWasAgreed(CodeOfConductWasAgreed),
    /// Publication was requested.
    FeedbackPublicationWasRequested(FeedbackPublicationWasRequested),
    /// The feedback was published.
    FeedbackWasPublished(FeedbackWasPublished),
}

impl DomainEvent for FeedbackEvent {
    fn event_type(&self) -> &'static str {
        match self {
            Self::FeedbackWasStarted(_) => FEEDBACK_WAS_STARTED_EVENT_TYPE,
            Self::FeedbackWasEntered(_) => FEEDBACK_WAS_ENTERED_EVENT_TYPE,
            Self::PersonaWasChosen(_) => PERSONA_WAS_CHOSEN_EVENT_TYPE,
            Self::CodeOfConductWasAgreed(_) => CODE_OF_CONDUCT_WAS_AGREED_EVENT_TYPE,
            Self::FeedbackPublicationWasRequested(_) => {
                FEEDBACK_PUBLICATION_WAS_REQUESTED_EVENT_TYPE
            }
            Self::FeedbackWasPublished(_) => FEEDBACK_WAS_PUBLISHED_EVENT_TYPE,
        }
    }
}
