//! Routes for the Dataset Reviews bounded context.

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use prereview_core::command::Command;
use prereview_core::values::{Doi, Orcid};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use prereview_dataset_reviews::application::query_handlers::DatasetReviewView;
use prereview_dataset_reviews::application::{command_handlers, query_handlers};
use prereview_dataset_reviews::domain::commands::DatasetReviewCommand;

use crate::error::ApiError;
use crate::routes::{CommandJson, CommandResponse};
use crate::state::AppState;

/// Query string for GET /in-progress.
#[derive(Debug, Deserialize)]
pub struct InProgressParams {
    /// The reviewer.
    pub author_id: Orcid,
    /// The dataset under review.
    pub dataset_id: Doi,
}

/// Query string for GET /published.
#[derive(Debug, Deserialize)]
pub struct PublishedParams {
    /// The dataset under review.
    pub dataset_id: Doi,
}

/// Response body for GET /{dataset_review_id}/author.
#[derive(Debug, Serialize)]
pub struct AuthorResponse {
    /// The reviewer, once the review was started.
    pub author_id: Option<Orcid>,
}

/// Response body for GET /{dataset_review_id}/zenodo-record.
#[derive(Debug, Serialize)]
pub struct ZenodoRecordResponse {
    /// The Zenodo record, once created.
    pub record_id: Option<u64>,
}

/// Response body for GET /{dataset_review_id}/doi.
#[derive(Debug, Serialize)]
pub struct DoiResponse {
    /// The DOI, once the review is published.
    pub doi: Option<Doi>,
}

/// Response body for GET /in-progress.
#[derive(Debug, Serialize)]
pub struct InProgressResponse {
    /// The review still being written, if any.
    pub dataset_review_id: Option<Uuid>,
}

/// Response body for GET /published.
#[derive(Debug, Serialize)]
pub struct PublishedResponse {
    /// Published reviews in the order they were started.
    pub dataset_review_ids: Vec<Uuid>,
}

/// POST /{dataset_review_id}/commands
#[instrument(skip(state, command), fields(command_type = command.command_type()))]
async fn handle_command(
    State(state): State<AppState>,
    Path(dataset_review_id): Path<Uuid>,
    CommandJson(command): CommandJson<DatasetReviewCommand>,
) -> Result<Json<CommandResponse>, ApiError> {
    let outcome = command_handlers::handle_dataset_review_command(
        dataset_review_id,
        &command,
        state.clock.as_ref(),
        &*state.event_repository,
        &state.dataset_review_bus,
    )
    .await?;

    info!(
        resource_version = outcome.resource_version,
        "dataset review command handled"
    );

    Ok(Json(CommandResponse::from(outcome)))
}

/// GET /{dataset_review_id}
#[instrument(skip(state))]
async fn get_dataset_review(
    State(state): State<AppState>,
    Path(dataset_review_id): Path<Uuid>,
) -> Result<Json<DatasetReviewView>, ApiError> {
    let view =
        query_handlers::get_dataset_review(dataset_review_id, &*state.event_repository).await?;
    if view.version == 0 {
        return Err(ApiError::NotFound(dataset_review_id));
    }
    Ok(Json(view))
}

/// GET /{dataset_review_id}/author
#[instrument(skip(state))]
async fn get_author(
    State(state): State<AppState>,
    Path(dataset_review_id): Path<Uuid>,
) -> Result<Json<AuthorResponse>, ApiError> {
    let author_id = query_handlers::get_author(dataset_review_id, &*state.event_repository).await?;
    Ok(Json(AuthorResponse { author_id }))
}

/// GET /{dataset_review_id}/zenodo-record
#[instrument(skip(state))]
async fn get_zenodo_record(
    State(state): State<AppState>,
    Path(dataset_review_id): Path<Uuid>,
) -> Result<Json<ZenodoRecordResponse>, ApiError> {
    let record_id =
        query_handlers::get_zenodo_record_id(dataset_review_id, &*state.event_repository).await?;
    Ok(Json(ZenodoRecordResponse { record_id }))
}

/// GET /{dataset_review_id}/doi
#[instrument(skip(state))]
async fn get_doi(
    State(state): State<AppState>,
    Path(dataset_review_id): Path<Uuid>,
) -> Result<Json<DoiResponse>, ApiError> {
    let doi =
        query_handlers::get_published_doi(dataset_review_id, &*state.event_repository).await?;
    Ok(Json(DoiResponse { doi }))
}

/// GET /in-progress?author_id=&dataset_id=
#[instrument(skip(state))]
async fn find_in_progress(
    State(state): State<AppState>,
    Query(params): Query<InProgressParams>,
) -> Result<Json<InProgressResponse>, ApiError> {
    let dataset_review_id = query_handlers::find_in_progress_review_for_a_dataset(
        &params.author_id,
        &params.dataset_id,
        &*state.event_repository,
    )
    .await?;
    Ok(Json(InProgressResponse { dataset_review_id }))
}

/// GET /published?dataset_id=
#[instrument(skip(state))]
async fn find_published(
    State(state): State<AppState>,
    Query(params): Query<PublishedParams>,
) -> Result<Json<PublishedResponse>, ApiError> {
    let dataset_review_ids = query_handlers::find_published_reviews_for_a_dataset(
        &params.dataset_id,
        &*state.event_repository,
    )
    .await?;
    Ok(Json(PublishedResponse { dataset_review_ids }))
}

/// Returns the dataset reviews router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/in-progress", get(find_in_progress))
        .route("/published", get(find_published))
        .route("/{dataset_review_id}", get(get_dataset_review))
        .route("/{dataset_review_id}/author", get(get_author))
        .route("/{dataset_review_id}/zenodo-record", get(get_zenodo_record))
        .route("/{dataset_review_id}/doi", get(get_doi))
        .route("/{dataset_review_id}/commands", post(handle_command))
}
