//! Query handlers for the Feedback context.
//!
//! Single-feedback queries fold one history. The per-author queries fold
//! every feedback whose first event is a start by that author on that
//! PREreview.

use std::collections::HashSet;

use prereview_core::command::load_state;
use prereview_core::error::QueryError;
use prereview_core::projection::{fold_resources, load_all_events};
use prereview_core::repository::EventRepository;
use prereview_core::values::{Orcid, Persona};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::aggregates::Feedback;
use crate::domain::events::FeedbackEvent;
use crate::domain::state::FeedbackState;

/// Read-only view of one feedback resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackView {
    /// The feedback identifier.
    pub feedback_id: Uuid,
    /// Number of events folded into `state`.
    pub version: i64,
    /// Current state.
    pub state: FeedbackState,
}

/// Retrieves the current state of one feedback. Unknown ids are
/// `NotStarted` at version 0.
///
/// # Errors
///
/// Returns `QueryError` if the history cannot be loaded or decoded.
pub async fn get_feedback(
    feedback_id: Uuid,
    repo: &dyn EventRepository,
) -> Result<FeedbackView, QueryError> {
    let (state, version) = load_state::<Feedback>(feedback_id, repo).await?;
    Ok(FeedbackView {
        feedback_id,
        version,
        state,
    })
}

/// Returns the persona chosen for a feedback, if one has been chosen.
///
/// # Errors
///
/// Returns `QueryError` if the history cannot be loaded or decoded.
pub async fn get_persona_choice(
    feedback_id: Uuid,
    repo: &dyn EventRepository,
) -> Result<Option<Persona>, QueryError> {
    let (state, _) = load_state::<Feedback>(feedback_id, repo).await?;
    Ok(state.persona())
}

/// Returns every unpublished feedback an author has started on a PREreview,
/// in the order they were started.
///
/// # Errors
///
/// Returns `QueryError` if the log cannot be loaded or decoded.
pub async fn get_all_unpublished_feedback_by_an_author_for_a_prereview(
    author_id: &Orcid,
    prereview_id: u64,
    repo: &dyn EventRepository,
) -> Result<Vec<(Uuid, FeedbackState)>, QueryError> {
    let events = load_all_events::<Feedback>(repo).await?;
    let feedback = fold_resources::<Feedback, _>(&events, |event| {
        matches!(
            event,
            FeedbackEvent::FeedbackWasStarted(started)
                if started.author_id == *author_id && started.prereview_id == prereview_id
        )
    });
    Ok(feedback
        .into_iter()
        .filter(|(_, state)| !state.is_published())
        .collect())
}

/// Whether an author has any unpublished feedback on a PREreview.
///
/// # Errors
///
/// Returns `QueryError` if the log cannot be loaded or decoded.
pub async fn has_unpublished_feedback_by_an_author_for_a_prereview(
    author_id: &Orcid,
    prereview_id: u64,
    repo: &dyn EventRepository,
) -> Result<bool, QueryError> {
    let unpublished =
        get_all_unpublished_feedback_by_an_author_for_a_prereview(author_id, prereview_id, repo)
            .await?;
    Ok(!unpublished.is_empty())
}

/// Finds the feedback whose publication was most recently requested and
/// that has not been published since.
///
/// # Errors
///
/// Returns `QueryError` if the log cannot be loaded or decoded.
pub async fn get_one_feedback_waiting_to_be_published(
    repo: &dyn EventRepository,
) -> Result<Option<Uuid>, QueryError> {
    let events = load_all_events::<Feedback>(repo).await?;
    let mut published = HashSet::new();

    for entry in events.iter().rev() {
        match entry.event {
            FeedbackEvent::FeedbackWasPublished(_) => {
                published.insert(entry.resource_id);
            }
            FeedbackEvent::FeedbackPublicationWasRequested(_)
                if !published.contains(&entry.resource_id) =>
            {
                return Ok(Some(entry.resource_id));
            }
            _ => {}
        }
    }

    Ok(None)
}
