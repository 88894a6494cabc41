//! Query handlers for the Dataset Reviews context.

use prereview_core::command::load_state;
use prereview_core::error::QueryError;
use prereview_core::projection::{fold_resources, load_all_events};
use prereview_core::repository::EventRepository;
use prereview_core::values::{Doi, Orcid};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::aggregates::DatasetReview;
use crate::domain::events::DatasetReviewEvent;
use crate::domain::state::DatasetReviewState;

/// Read-only view of one dataset review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetReviewView {
    /// The dataset review identifier.
    pub dataset_review_id: Uuid,
    /// Number of events folded into `state`.
    pub version: i64,
    /// Current state.
    pub state: DatasetReviewState,
}

/// Retrieves the current state of one dataset review. Unknown ids are
/// `NotStarted` at version 0.
///
/// # Errors
///
/// Returns `QueryError` if the history cannot be loaded or decoded.
pub async fn get_dataset_review(
    dataset_review_id: Uuid,
    repo: &dyn EventRepository,
) -> Result<DatasetReviewView, QueryError> {
    let (state, version) = load_state::<DatasetReview>(dataset_review_id, repo).await?;
    Ok(DatasetReviewView {
        dataset_review_id,
        version,
        state,
    })
}

/// Returns the reviewer, if the review has been started.
///
/// # Errors
///
/// Returns `QueryError` if the history cannot be loaded or decoded.
pub async fn get_author(
    dataset_review_id: Uuid,
    repo: &dyn EventRepository,
) -> Result<Option<Orcid>, QueryError> {
    let (state, _) = load_state::<DatasetReview>(dataset_review_id, repo).await?;
    Ok(state.author_id().cloned())
}

/// Returns the Zenodo record id once the record has been created.
///
/// # Errors
///
/// Returns `QueryError` if the history cannot be loaded or decoded.
pub async fn get_zenodo_record_id(
    dataset_review_id: Uuid,
    repo: &dyn EventRepository,
) -> Result<Option<u64>, QueryError> {
    let (state, _) = load_state::<DatasetReview>(dataset_review_id, repo).await?;
    Ok(state.zenodo_record_id())
}

/// Returns the DOI of a published review. Reviews still being published have
/// no public DOI yet.
///
/// # Errors
///
/// Returns `QueryError` if the history cannot be loaded or decoded.
pub async fn get_published_doi(
    dataset_review_id: Uuid,
    repo: &dyn EventRepository,
) -> Result<Option<Doi>, QueryError> {
    let (state, _) = load_state::<DatasetReview>(dataset_review_id, repo).await?;
    Ok(match state {
        DatasetReviewState::Published(published) => Some(published.doi),
        _ => None,
    })
}

/// Finds the review an author is still writing for a dataset. When there is
/// more than one, the one started last wins.
///
/// # Errors
///
/// Returns `QueryError` if the log cannot be loaded or decoded.
pub async fn find_in_progress_review_for_a_dataset(
    author_id: &Orcid,
    dataset_id: &Doi,
    repo: &dyn EventRepository,
) -> Result<Option<Uuid>, QueryError> {
    let events = load_all_events::<DatasetReview>(repo).await?;
    let reviews = fold_resources::<DatasetReview, _>(&events, |event| {
        matches!(
            event,
            DatasetReviewEvent::DatasetReviewWasStarted(started)
                if started.author_id == *author_id && started.dataset_id == *dataset_id
        )
    });

    Ok(reviews
        .into_iter()
        .rev()
        .find(|(_, state)| state.is_in_progress())
        .map(|(dataset_review_id, _)| dataset_review_id))
}

/// Lists the published reviews of a dataset, in the order they were
/// started.
///
/// # Errors
///
/// Returns `QueryError` if the log cannot be loaded or decoded.
pub async fn find_published_reviews_for_a_dataset(
    dataset_id: &Doi,
    repo: &dyn EventRepository,
) -> Result<Vec<Uuid>, QueryError> {
    let events = load_all_events::<DatasetReview>(repo).await?;
    let reviews = fold_resources::<DatasetReview, _>(&events, |event| {
        matches!(
            event,
            DatasetReviewEvent::DatasetReviewWasStarted(started) if started.dataset_id == *dataset_id
        )
    });

    Ok(reviews
        .into_iter()
        .filter(|(_, state)| matches!(state, DatasetReviewState::Published(_)))
        .map(|(dataset_review_id, _)| dataset_review_id)
        .collect())
}
