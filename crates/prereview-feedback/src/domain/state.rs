//! Feedback state and its evolution.

use prereview_core::values::{Doi, Orcid, Persona};
use serde::Serialize;

use super::events::FeedbackEvent;

/// Derived state of one feedback resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FeedbackState {
    /// No events yet.
    NotStarted,
    /// Started, still missing required fields.
    InProgress(FeedbackInProgress),
    /// Every required field is present.
    ReadyForPublishing(FeedbackReadyForPublishing),
    /// Publication was requested; no further edits.
    BeingPublished(FeedbackBeingPublished),
    /// Public, with an external record.
    Published(FeedbackPublished),
}

/// Feedback being written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackInProgress {
    /// The author writing the feedback.
    pub author_id: Orcid,
    /// The PREreview the feedback is about.
    pub prereview_id: u64,
    /// The feedback text, once entered.
    pub feedback: Option<String>,
    /// The chosen persona, once chosen.
    pub persona: Option<Persona>,
    /// Whether the code of conduct was agreed.
    pub code_of_conduct_agreed: bool,
}

/// Feedback with every required field present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackReadyForPublishing {
    /// The author writing the feedback.
    pub author_id: Orcid,
    /// The PREreview the feedback is about.
    pub prereview_id: u64,
    /// The feedback text.
    pub feedback: String,
    /// The chosen persona.
    pub persona: Persona,
}

/// Feedback waiting for its public record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackBeingPublished {
    /// The author of the feedback.
    pub author_id: Orcid,
    /// The PREreview the feedback is about.
    pub prereview_id: u64,
    /// The feedback text.
    pub feedback: String,
    /// The chosen persona.
    pub persona: Persona,
}

/// Published feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackPublished {
    /// The author of the feedback.
    pub author_id: Orcid,
    /// The PREreview the feedback is about.
    pub prereview_id: u64,
    /// The feedback text.
    pub feedback: String,
    /// The chosen persona.
    pub persona: Persona,
    /// The external record identifier.
    pub id: u64,
    /// The DOI assigned to the record.
    pub doi: Doi,
}

impl FeedbackState {
    /// The author, for any started feedback.
    #[must_use]
    pub fn author_id(&self) -> Option<&Orcid> {
        match self {
            Self::NotStarted => None,
            Self::InProgress(s) => Some(&s.author_id),
            Self::ReadyForPublishing(s) => Some(&s.author_id),
            Self::BeingPublished(s) => Some(&s.author_id),
            Self::Published(s) => Some(&s.author_id),
        }
    }

    /// The chosen persona, if any.
    #[must_use]
    pub fn persona(&self) -> Option<Persona> {
        match self {
            Self::NotStarted => None,
            Self::InProgress(s) => s.persona,
            Self::ReadyForPublishing(s) => Some(s.persona),
            Self::BeingPublished(s) => Some(s.persona),
            Self::Published(s) => Some(s.persona),
        }
    }

    /// Whether the feedback has reached its terminal state.
    #[must_use]
    pub fn is_published(&self) -> bool {
        matches!(self, Self::Published(_))
    }
}

impl FeedbackInProgress {
    fn apply(mut self, event: &FeedbackEvent) -> FeedbackState {
        match event {
            FeedbackEvent::FeedbackWasEntered(e) => self.feedback = Some(e.feedback.clone()),
            FeedbackEvent::PersonaWasChosen(e) => self.persona = Some(e.persona),
            FeedbackEvent::CodeOfConductWasAgreed(_) => self.code_of_conduct_agreed = true,
            FeedbackEvent::FeedbackWasStarted(_)
            | FeedbackEvent::FeedbackPublicationWasRequested(_)
            | FeedbackEvent::FeedbackWasPublished(_) => {}
        }
        self.promote()
    }

    /// Moves to `ReadyForPublishing` exactly when every required field is
    /// present.
    fn promote(self) -> FeedbackState {
        match self {
            Self {
                author_id,
                prereview_id,
                feedback: Some(feedback),
                persona: Some(persona),
                code_of_conduct_agreed: true,
            } => FeedbackState::ReadyForPublishing(FeedbackReadyForPublishing {
                author_id,
                prereview_id,
                feedback,
                persona,
            }),
            draft => FeedbackState::InProgress(draft),
        }
    }
}

impl From<FeedbackReadyForPublishing> for FeedbackInProgress {
    fn from(ready: FeedbackReadyForPublishing) -> Self {
        Self {
            author_id: ready.author_id,
            prereview_id: ready.prereview_id,
            feedback: Some(ready.feedback),
            persona: Some(ready.persona),
            code_of_conduct_agreed: true,
        }
    }
}

/// Applies one event to a feedback state.
#[must_use]
pub fn evolve(state: FeedbackState, event: &FeedbackEvent) -> FeedbackState {
    match (state, event) {
        (FeedbackState::NotStarted, FeedbackEvent::FeedbackWasStarted(started)) => {
            FeedbackState::InProgress(FeedbackInProgress {
                author_id: started.author_id.clone(),
                prereview_id: started.prereview_id,
                feedback: None,
                persona: None,
                code_of_conduct_agreed: false,
            })
        }
        (FeedbackState::InProgress(draft), event) => draft.apply(event),
        (
            FeedbackState::ReadyForPublishing(ready),
            FeedbackEvent::FeedbackPublicationWasRequested(_),
        ) => FeedbackState::BeingPublished(FeedbackBeingPublished {
            author_id: ready.author_id,
            prereview_id: ready.prereview_id,
            feedback: ready.feedback,
            persona: ready.persona,
        }),
        (FeedbackState::ReadyForPublishing(ready), event) => {
            FeedbackInProgress::from(ready).apply(event)
        }
        (FeedbackState::BeingPublished(pending), FeedbackEvent::FeedbackWasPublished(published)) => {
            FeedbackState::Published(FeedbackPublished {
                author_id: pending.author_id,
                prereview_id: pending.prereview_id,
                feedback: pending.feedback,
                persona: pending.persona,
                id: published.id,
                doi: published.doi.clone(),
            })
        }
        (state, _) => state,
    }
}
