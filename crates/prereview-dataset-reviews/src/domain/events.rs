//! Domain events for the Dataset Reviews context.

use chrono::NaiveDate;
use prereview_core::event::DomainEvent;
use prereview_core::values::{CompetingInterests, Doi, Orcid, Persona};
use serde::{Deserialize, Serialize};

/// An answer to one of the review's questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    /// Yes.
    Yes,
    /// Partly.
    Partly,
    /// No.
    No,
    /// The reviewer is unsure.
    Unsure,
}

/// Emitted when an author starts reviewing a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetReviewWasStarted {
    /// The reviewer.
    pub author_id: Orcid,
    /// The DOI of the reviewed dataset.
    pub dataset_id: Doi,
}

/// Emitted when the reviewer answers whether the dataset follows the FAIR
/// and CARE principles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnsweredIfTheDatasetFollowsFairAndCarePrinciples {
    /// The answer.
    pub answer: Answer,
}

/// Emitted when the reviewer answers whether the dataset has enough
/// metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnsweredIfTheDatasetHasEnoughMetadata {
    /// The answer.
    pub answer: Answer,
}

/// Emitted when the reviewer answers whether the dataset tracks changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnsweredIfTheDatasetHasTrackedChanges {
    /// The answer.
    pub answer: Answer,
}

/// Emitted when the reviewer chooses how they appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaForDatasetReviewWasChosen {
    /// The chosen persona.
    pub persona: Persona,
}

/// Emitted when the reviewer declares their competing interests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetingInterestsForDatasetReviewWereDeclared {
    /// The declaration.
    pub competing_interests: CompetingInterests,
}

/// Emitted when the reviewer asks for the review to be published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationOfDatasetReviewWasRequested {}

/// Emitted when a Zenodo record was created for the review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZenodoRecordForDatasetReviewWasCreated {
    /// The Zenodo record identifier.
    pub record_id: u64,
}

/// Emitted when the Zenodo record's DOI was reserved for the review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetReviewWasAssignedADoi {
    /// The DOI.
    pub doi: Doi,
}

/// Emitted once the review is public.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetReviewWasPublished {
    /// The date the review became public.
    pub publication_date: NaiveDate,
}

/// Event type identifier for [`DatasetReviewWasStarted`].
pub const DATASET_REVIEW_WAS_STARTED_EVENT_TYPE: &str =
    "dataset_review.dataset_review_was_started";

/// Event type identifier for [`AnsweredIfTheDatasetFollowsFairAndCarePrinciples`].
pub const ANSWERED_IF_THE_DATASET_FOLLOWS_FAIR_AND_CARE_PRINCIPLES_EVENT_TYPE: &str =
    "dataset_review.answered_if_the_dataset_follows_fair_and_care_principles";

/// Event type identifier for [`AnsweredIfTheDatasetHasEnoughMetadata`].
pub const ANSWERED_IF_THE_DATASET_HAS_ENOUGH_METADATA_EVENT_TYPE: &str =
    "dataset_review.answered_if_the_dataset_has_enough_metadata";

/// Event type identifier for [`AnsweredIfTheDatasetHasTrackedChanges`].
pub const ANSWERED_IF_THE_DATASET_HAS_TRACKED_CHANGES_EVENT_TYPE: &str =
    "dataset_review.answered_if_the_dataset_has_tracked_changes";

/// Event type identifier for [`PersonaForDatasetReviewWasChosen`].
pub const PERSONA_FOR_DATASET_REVIEW_WAS_CHOSEN_EVENT_TYPE: &str =
    "dataset_review.persona_for_dataset_review_was_chosen";

/// Event type identifier for [`CompetingInterestsForDatasetReviewWereDeclared`].
pub const COMPETING_INTERESTS_FOR_DATASET_REVIEW_WERE_DECLARED_EVENT_TYPE: &str =
    "dataset_review.competing_interests_for_dataset_review_were_declared";

/// Event type identifier for [`PublicationOfDatasetReviewWasRequested`].
pub const PUBLICATION_OF_DATASET_REVIEW_WAS_REQUESTED_EVENT_TYPE: &str =
    "dataset_review.publication_of_dataset_review_was_requested";

/// Event type identifier for [`ZenodoRecordForDatasetReviewWasCreated`].
pub const ZENODO_RECORD_FOR_DATASET_REVIEW_WAS_CREATED_EVENT_TYPE: &str =
    "dataset_review.zenodo_record_for_dataset_review_was_created";

/// Event type identifier for [`DatasetReviewWasAssignedADoi`].
pub const DATASET_REVIEW_WAS_ASSIGNED_A_DOI_EVENT_TYPE: &str =
    "dataset_review.dataset_review_was_assigned_a_doi";

/// Event type identifier for [`DatasetReviewWasPublished`].
pub const DATASET_REVIEW_WAS_PUBLISHED_EVENT_TYPE: &str =
    "dataset_review.dataset_review_was_published";

/// Event payload variants for the Dataset Reviews context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatasetReviewEvent {
    /// The review was started.
    DatasetReviewWasStarted(DatasetReviewWasStarted),
    /// The FAIR/CARE question was answered.
    AnsweredIfTheDatasetFollowsFairAndCarePrinciples(
        AnsweredIfTheDatasetFollowsFairAndCarePrinciples,
    ),
    /// The metadata question was answered.
    AnsweredIfTheDatasetHasEnoughMetadata(AnsweredIfTheDatasetHasEnoughMetadata),
    /// The tracked-changes question was answered.
    AnsweredIfTheDatasetHasTrackedChanges(AnsweredIfTheDatasetHasTrackedChanges),
    /// A persona was chosen.
    PersonaForDatasetReviewWasChosen(PersonaForDatasetReviewWasChosen),
    /// Competing interests were declared.
    CompetingInterestsForDatasetReviewWereDeclared(CompetingInterestsForDatasetReviewWereDeclared),
    /// Publication was requested.
    PublicationOfDatasetReviewWasRequested(PublicationOfDatasetReviewWasRequested),
    /// A Zenodo record was created.
    ZenodoRecordForDatasetReviewWasCreated(ZenodoRecordForDatasetReviewWasCreated),
    /// A DOI was assigned.
    DatasetReviewWasAssignedADoi(DatasetReviewWasAssignedADoi),
    /// The review was published.
    DatasetReviewWasPublished(DatasetReviewWasPublished),
}

impl DomainEvent for DatasetReviewEvent {
    fn event_type(&self) -> &'static str {
        match self {
            Self::DatasetReviewWasStarted(_) => DATASET_REVIEW_WAS_STARTED_EVENT_TYPE,
            Self::AnsweredIfTheDatasetFollowsFairAndCarePrinciples(_) => {
                ANSWERED_IF_THE_DATASET_FOLLOWS_FAIR_AND_CARE_PRINCIPLES_EVENT_TYPE
            }
            Self::AnsweredIfTheDatasetHasEnoughMetadata(_) => {
                ANSWERED_IF_THE_DATASET_HAS_ENOUGH_METADATA_EVENT_TYPE
            }
            Self::AnsweredIfTheDatasetHasTrackedChanges(_) => {
                ANSWERED_IF_THE_DATASET_HAS_TRACKED_CHANGES_EVENT_TYPE
            }
            Self::PersonaForDatasetReviewWasChosen(_) => {
                PERSONA_FOR_DATASET_REVIEW_WAS_CHOSEN_EVENT_TYPE
            }
            Self::CompetingInterestsForDatasetReviewWereDeclared(_) => {
                COMPETING_INTERESTS_FOR_DATASET_REVIEW_WERE_DECLARED_EVENT_TYPE
            }
            Self::PublicationOfDatasetReviewWasRequested(_) => {
                PUBLICATION_OF_DATASET_REVIEW_WAS_REQUESTED_EVENT_TYPE
            }
            Self::ZenodoRecordForDatasetReviewWasCreated(_) => {
                ZENODO_RECORD_FOR_DATASET_REVIEW_WAS_CREATED_EVENT_TYPE
            }
            Self::DatasetReviewWasAssignedADoi(_) => DATASET_REVIEW_WAS_ASSIGNED_A_DOI_EVENT_TYPE,
            Self::DatasetReviewWasPublished(_) => DATASET_REVIEW_WAS_PUBLISHED_EVENT_TYPE,
        }
    }
}
