//! Commands for the Dataset Reviews context.

use chrono::NaiveDate;
use prereview_core::command::Command;
use prereview_core::values::{CompetingInterests, Doi, Orcid, Persona};
use serde::Deserialize;

use super::events::Answer;

/// Intents accepted by a dataset review.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DatasetReviewCommand {
    /// Start reviewing a dataset.
    StartDatasetReview {
        /// The reviewer.
        author_id: Orcid,
        /// The DOI of the reviewed dataset.
        dataset_id: Doi,
    },
    /// Answer whether the dataset follows the FAIR and CARE principles.
    AnswerIfTheDatasetFollowsFairAndCarePrinciples {
        /// The answer.
        answer: Answer,
    },
    /// Answer whether the dataset has enough metadata.
    AnswerIfTheDatasetHasEnoughMetadata {
        /// The answer.
        answer: Answer,
    },
    /// Answer whether the dataset tracks changes.
    AnswerIfTheDatasetHasTrackedChanges {
        /// The answer.
        answer: Answer,
    },
    /// Choose how the reviewer appears.
    ChoosePersona {
        /// The chosen persona.
        persona: Persona,
    },
    /// Declare competing interests.
    DeclareCompetingInterests {
        /// The declaration.
        competing_interests: CompetingInterests,
    },
    /// Request publication of a complete review.
    PublishDatasetReview,
    /// Record that a Zenodo record exists for the review.
    MarkRecordCreatedOnZenodo {
        /// The Zenodo record identifier.
        record_id: u64,
    },
    /// Record the DOI reserved for the review.
    MarkDoiAsAssigned {
        /// The DOI.
        doi: Doi,
    },
    /// Record that the review is now public.
    MarkDatasetReviewAsPublished {
        /// The date the review became public.
        publication_date: NaiveDate,
    },
}

impl Command for DatasetReviewCommand {
    fn command_type(&self) -> &'static str {
        match self {
            Self::StartDatasetReview { .. } => "dataset_review.start_dataset_review",
            Self::AnswerIfTheDatasetFollowsFairAndCarePrinciples { .. } => {
                "dataset_review.answer_if_the_dataset_follows_fair_and_care_principles"
            }
            Self::AnswerIfTheDatasetHasEnoughMetadata { .. } => {
                "dataset_review.answer_if_the_dataset_has_enough_metadata"
            }
            Self::AnswerIfTheDatasetHasTrackedChanges { .. } => {
                "dataset_review.answer_if_the_dataset_has_tracked_changes"
            }
            Self::ChoosePersona { .. } => "dataset_review.choose_persona",
            Self::DeclareCompetingInterests { .. } => "dataset_review.declare_competing_interests",
            Self::PublishDatasetReview => "dataset_review.publish_dataset_review",
            Self::MarkRecordCreatedOnZenodo { .. } => "dataset_review.mark_record_created_on_zenodo",
            Self::MarkDoiAsAssigned { .. } => "dataset_review.mark_doi_as_assigned",
            Self::MarkDatasetReviewAsPublished { .. } => {
                "dataset_review.mark_dataset_review_as_published"
            }
        }
    }
}
