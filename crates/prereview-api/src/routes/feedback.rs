//! Routes for the Feedback bounded context.

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use prereview_core::command::Command;
use prereview_core::values::{Orcid, Persona};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use prereview_feedback::application::{command_handlers, query_handlers};
use prereview_feedback::domain::commands::FeedbackCommand;
use prereview_feedback::domain::state::FeedbackState;

use crate::error::ApiError;
use crate::routes::{CommandJson, CommandResponse};
use crate::state::AppState;

/// Query string selecting one author's feedback on one PREreview.
#[derive(Debug, Deserialize)]
pub struct ByAuthorParams {
    /// The author.
    pub author_id: Orcid,
    /// The PREreview the feedback is about.
    pub prereview_id: u64,
}

/// One unpublished feedback resource.
#[derive(Debug, Serialize)]
pub struct UnpublishedFeedback {
    /// The feedback identifier.
    pub feedback_id: Uuid,
    /// Its current state.
    pub state: FeedbackState,
}

/// Response body for GET /{feedback_id}/persona.
#[derive(Debug, Serialize)]
pub struct PersonaResponse {
    /// The chosen persona, if any.
    pub persona: Option<Persona>,
}

/// Response body for GET /waiting-to-be-published.
#[derive(Debug, Serialize)]
pub struct WaitingResponse {
    /// Feedback whose publication was requested but not completed.
    pub feedback_id: Option<Uuid>,
}

/// POST /{feedback_id}/commands
#[instrument(skip(state, command), fields(command_type = command.command_type()))]
async fn handle_command(
    State(state): State<AppState>,
    Path(feedback_id): Path<Uuid>,
    CommandJson(command): CommandJson<FeedbackCommand>,
) -> Result<Json<CommandResponse>, ApiError> {
    let outcome = command_handlers::handle_feedback_command(
        feedback_id,
        &command,
        state.clock.as_ref(),
        &*state.event_repository,
        &state.feedback_bus,
    )
    .await?;

    info!(
        resource_version = outcome.resource_version,
        "feedback command handled"
    );

    Ok(Json(CommandResponse::from(outcome)))
}

/// GET /{feedback_id}
#[instrument(skip(state))]
async fn get_feedback(
    State(state): State<AppState>,
    Path(feedback_id): Path<Uuid>,
) -> Result<Json<query_handlers::FeedbackView>, ApiError> {
    let view = query_handlers::get_feedback(feedback_id, &*state.event_repository).await?;
    if view.version == 0 {
        return Err(ApiError::NotFound(feedback_id));
    }
    Ok(Json(view))
}

/// GET /{feedback_id}/persona
#[instrument(skip(state))]
async fn get_persona(
    State(state): State<AppState>,
    Path(feedback_id): Path<Uuid>,
) -> Result<Json<PersonaResponse>, ApiError> {
    let persona =
        query_handlers::get_persona_choice(feedback_id, &*state.event_repository).await?;
    Ok(Json(PersonaResponse { persona }))
}

/// GET /unpublished?author_id=&prereview_id=
#[instrument(skip(state))]
async fn list_unpublished(
    State(state): State<AppState>,
    Query(params): Query<ByAuthorParams>,
) -> Result<Json<Vec<UnpublishedFeedback>>, ApiError> {
    let feedback = query_handlers::get_all_unpublished_feedback_by_an_author_for_a_prereview(
        &params.author_id,
        params.prereview_id,
        &*state.event_repository,
    )
    .await?;

    Ok(Json(
        feedback
            .into_iter()
            .map(|(feedback_id, state)| UnpublishedFeedback { feedback_id, state })
            .collect(),
    ))
}

/// GET /waiting-to-be-published
#[instrument(skip(state))]
async fn waiting_to_be_published(
    State(state): State<AppState>,
) -> Result<Json<WaitingResponse>, ApiError> {
    let feedback_id =
        query_handlers::get_one_feedback_waiting_to_be_published(&*state.event_repository).await?;
    Ok(Json(WaitingResponse { feedback_id }))
}

/// Returns the feedback router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/unpublished", get(list_unpublished))
        .route("/waiting-to-be-published", get(waiting_to_be_published))
        .route("/{feedback_id}", get(get_feedback))
        .route("/{feedback_id}/persona", get(get_persona))
        .route("/{feedback_id}/commands", post(handle_command))
}
