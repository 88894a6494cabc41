//! Dataset review state and its evolution.

use chrono::NaiveDate;
use prereview_core::values::{CompetingInterests, Doi, Orcid, Persona};
use serde::Serialize;

use super::events::{Answer, DatasetReviewEvent};

/// Derived state of one dataset review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DatasetReviewState {
    /// No events yet.
    NotStarted,
    /// Started, still missing required answers.
    InProgress(DatasetReviewInProgress),
    /// Every required answer is present.
    ReadyForPublishing(DatasetReviewReadyForPublishing),
    /// Publication was requested and is moving through Zenodo.
    BeingPublished(DatasetReviewBeingPublished),
    /// Public.
    Published(DatasetReviewPublished),
}

/// A review being written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetReviewInProgress {
    /// The reviewer.
    pub author_id: Orcid,
    /// The DOI of the reviewed dataset.
    pub dataset_id: Doi,
    /// Whether the dataset follows the FAIR and CARE principles.
    pub follows_fair_and_care_principles: Option<Answer>,
    /// Whether the dataset has enough metadata.
    pub has_enough_metadata: Option<Answer>,
    /// Whether the dataset tracks changes.
    pub has_tracked_changes: Option<Answer>,
    /// The chosen persona.
    pub persona: Option<Persona>,
    /// The competing-interests declaration.
    pub competing_interests: Option<CompetingInterests>,
}

/// A complete review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetReviewReadyForPublishing {
    /// The reviewer.
    pub author_id: Orcid,
    /// The DOI of the reviewed dataset.
    pub dataset_id: Doi,
    /// Whether the dataset follows the FAIR and CARE principles.
    pub follows_fair_and_care_principles: Answer,
    /// Whether the dataset has enough metadata, if answered.
    pub has_enough_metadata: Option<Answer>,
    /// Whether the dataset tracks changes, if answered.
    pub has_tracked_changes: Option<Answer>,
    /// The chosen persona.
    pub persona: Persona,
    /// The competing-interests declaration.
    pub competing_interests: CompetingInterests,
}

/// A review moving through the publication pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetReviewBeingPublished {
    /// The complete review.
    #[serde(flatten)]
    pub review: DatasetReviewReadyForPublishing,
    /// The Zenodo record, once created.
    pub zenodo_record_id: Option<u64>,
    /// The DOI, once assigned. Never set before `zenodo_record_id`.
    pub doi: Option<Doi>,
}

/// A public review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetReviewPublished {
    /// The complete review.
    #[serde(flatten)]
    pub review: DatasetReviewReadyForPublishing,
    /// The Zenodo record.
    pub zenodo_record_id: u64,
    /// The DOI.
    pub doi: Doi,
    /// The date the review became public.
    pub publication_date: NaiveDate,
}

impl DatasetReviewState {
    /// The reviewer, for any started review.
    #[must_use]
    pub fn author_id(&self) -> Option<&Orcid> {
        match self {
            Self::NotStarted => None,
            Self::InProgress(s) => Some(&s.author_id),
            Self::ReadyForPublishing(s) => Some(&s.author_id),
            Self::BeingPublished(s) => Some(&s.review.author_id),
            Self::Published(s) => Some(&s.review.author_id),
        }
    }

    /// The Zenodo record, once created.
    #[must_use]
    pub fn zenodo_record_id(&self) -> Option<u64> {
        match self {
            Self::BeingPublished(s) => s.zenodo_record_id,
            Self::Published(s) => Some(s.zenodo_record_id),
            Self::NotStarted | Self::InProgress(_) | Self::ReadyForPublishing(_) => None,
        }
    }

    /// Whether the review is still editable.
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Self::InProgress(_) | Self::ReadyForPublishing(_))
    }
}

impl DatasetReviewInProgress {
    fn apply(mut self, event: &DatasetReviewEvent) -> DatasetReviewState {
        match event {
            DatasetReviewEvent::AnsweredIfTheDatasetFollowsFairAndCarePrinciples(e) => {
                self.follows_fair_and_care_principles = Some(e.answer);
            }
            DatasetReviewEvent::AnsweredIfTheDatasetHasEnoughMetadata(e) => {
                self.has_enough_metadata = Some(e.answer);
            }
            DatasetReviewEvent::AnsweredIfTheDatasetHasTrackedChanges(e) => {
                self.has_tracked_changes = Some(e.answer);
            }
            DatasetReviewEvent::PersonaForDatasetReviewWasChosen(e) => {
                self.persona = Some(e.persona);
            }
            DatasetReviewEvent::CompetingInterestsForDatasetReviewWereDeclared(e) => {
                self.competing_interests = Some(e.competing_interests.clone());
            }
            DatasetReviewEvent::DatasetReviewWasStarted(_)
            | DatasetReviewEvent::PublicationOfDatasetReviewWasRequested(_)
            | DatasetReviewEvent::ZenodoRecordForDatasetReviewWasCreated(_)
            | DatasetReviewEvent::DatasetReviewWasAssignedADoi(_)
            | DatasetReviewEvent::DatasetReviewWasPublished(_) => {}
        }
        self.promote()
    }

    fn promote(self) -> DatasetReviewState {
        match self {
            Self {
                author_id,
                dataset_id,
                follows_fair_and_care_principles: Some(follows_fair_and_care_principles),
                has_enough_metadata,
                has_tracked_changes,
                persona: Some(persona),
                competing_interests: Some(competing_interests),
            } => DatasetReviewState::ReadyForPublishing(DatasetReviewReadyForPublishing {
                author_id,
                dataset_id,
                follows_fair_and_care_principles,
                has_enough_metadata,
                has_tracked_changes,
                persona,
                competing_interests,
            }),
            draft => DatasetReviewState::InProgress(draft),
        }
    }
}

impl From<DatasetReviewReadyForPublishing> for DatasetReviewInProgress {
    fn from(ready: DatasetReviewReadyForPublishing) -> Self {
        Self {
            author_id: ready.author_id,
            dataset_id: ready.dataset_id,
            follows_fair_and_care_principles: Some(ready.follows_fair_and_care_principles),
            has_enough_metadata: ready.has_enough_metadata,
            has_tracked_changes: ready.has_tracked_changes,
            persona: Some(ready.persona),
            competing_interests: Some(ready.competing_interests),
        }
    }
}

impl DatasetReviewBeingPublished {
    fn apply(self, event: &DatasetReviewEvent) -> DatasetReviewState {
        match (self, event) {
            (
                pending @ Self {
                    zenodo_record_id: None,
                    ..
                },
                DatasetReviewEvent::ZenodoRecordForDatasetReviewWasCreated(created),
            ) => DatasetReviewState::BeingPublished(Self {
                zenodo_record_id: Some(created.record_id),
                ..pending
            }),
            (
                pending @ Self {
                    zenodo_record_id: Some(_),
                    doi: None,
                    ..
                },
                DatasetReviewEvent::DatasetReviewWasAssignedADoi(assigned),
            ) => DatasetReviewState::BeingPublished(Self {
                doi: Some(assigned.doi.clone()),
                ..pending
            }),
            (
                Self {
                    review,
                    zenodo_record_id: Some(zenodo_record_id),
                    doi: Some(doi),
                },
                DatasetReviewEvent::DatasetReviewWasPublished(published),
            ) => DatasetReviewState::Published(DatasetReviewPublished {
                review,
                zenodo_record_id,
                doi,
                publication_date: published.publication_date,
            }),
            (pending, _) => DatasetReviewState::BeingPublished(pending),
        }
    }
}

/// Applies one event to a dataset review state.
#[must_use]
pub fn evolve(state: DatasetReviewState, event: &DatasetReviewEvent) -> DatasetReviewState {
    match (state, event) {
        (DatasetReviewState::NotStarted, DatasetReviewEvent::DatasetReviewWasStarted(started)) => {
            DatasetReviewState::InProgress(DatasetReviewInProgress {
                author_id: started.author_id.clone(),
                dataset_id: started.dataset_id.clone(),
                follows_fair_and_care_principles: None,
                has_enough_metadata: None,
                has_tracked_changes: None,
                persona: None,
                competing_interests: None,
            })
        }
        (DatasetReviewState::InProgress(draft), event) => draft.apply(event),
        (
            DatasetReviewState::ReadyForPublishing(ready),
            DatasetReviewEvent::PublicationOfDatasetReviewWasRequested(_),
        ) => DatasetReviewState::BeingPublished(DatasetReviewBeingPublished {
            review: ready,
            zenodo_record_id: None,
            doi: None,
        }),
        (DatasetReviewState::ReadyForPublishing(ready), event) => {
            DatasetReviewInProgress::from(ready).apply(event)
        }
        (DatasetReviewState::BeingPublished(pending), event) => pending.apply(event),
        (state, _) => state,
    }
}
