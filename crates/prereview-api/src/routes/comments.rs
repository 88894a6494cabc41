//! Routes for the Comments bounded context.

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use prereview_core::command::Command;
use prereview_core::values::Orcid;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use prereview_comments::application::query_handlers::{CommentView, NextExpectedCommand};
use prereview_comments::application::{command_handlers, query_handlers};
use prereview_comments::domain::commands::CommentCommand;

use crate::error::ApiError;
use crate::routes::{CommandJson, CommandResponse};
use crate::state::AppState;

/// Query string selecting one author's comment on one PREreview.
#[derive(Debug, Deserialize)]
pub struct ByAuthorParams {
    /// The author.
    pub author_id: Orcid,
    /// The PREreview being commented on.
    pub prereview_id: u64,
}

/// Response body for GET /in-need-of-a-doi.
#[derive(Debug, Serialize)]
pub struct InNeedOfADoiResponse {
    /// A comment waiting for its DOI, if any.
    pub comment_id: Option<Uuid>,
}

/// POST /{comment_id}/commands
#[instrument(skip(state, command), fields(command_type = command.command_type()))]
async fn handle_command(
    State(state): State<AppState>,
    Path(comment_id): Path<Uuid>,
    CommandJson(command): CommandJson<CommentCommand>,
) -> Result<Json<CommandResponse>, ApiError> {
    let outcome = command_handlers::handle_comment_command(
        comment_id,
        &command,
        state.clock.as_ref(),
        &*state.event_repository,
        &state.comment_bus,
    )
    .await?;

    info!(
        resource_version = outcome.resource_version,
        "comment command handled"
    );

    Ok(Json(CommandResponse::from(outcome)))
}

/// GET /{comment_id}
#[instrument(skip(state))]
async fn get_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<Uuid>,
) -> Result<Json<CommentView>, ApiError> {
    let view = query_handlers::get_comment(comment_id, &*state.event_repository).await?;
    if view.version == 0 {
        return Err(ApiError::NotFound(comment_id));
    }
    Ok(Json(view))
}

/// GET /{comment_id}/next-expected-command
#[instrument(skip(state))]
async fn next_expected_command_on_a_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<Uuid>,
) -> Result<Json<NextExpectedCommand>, ApiError> {
    let next = query_handlers::get_next_expected_command_for_user_on_a_comment(
        comment_id,
        &*state.event_repository,
    )
    .await?;
    Ok(Json(next))
}

/// GET /next-expected-command?author_id=&prereview_id=
#[instrument(skip(state))]
async fn next_expected_command_for_user(
    State(state): State<AppState>,
    Query(params): Query<ByAuthorParams>,
) -> Result<Json<NextExpectedCommand>, ApiError> {
    let next = query_handlers::get_next_expected_command_for_user(
        &params.author_id,
        params.prereview_id,
        &*state.event_repository,
    )
    .await?;
    Ok(Json(next))
}

/// GET /in-need-of-a-doi
#[instrument(skip(state))]
async fn in_need_of_a_doi(
    State(state): State<AppState>,
) -> Result<Json<InNeedOfADoiResponse>, ApiError> {
    let comment_id = query_handlers::get_a_comment_in_need_of_a_doi(&*state.event_repository).await?;
    Ok(Json(InNeedOfADoiResponse { comment_id }))
}

/// Returns the comments router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/next-expected-command", get(next_expected_command_for_user))
        .route("/in-need-of-a-doi", get(in_need_of_a_doi))
        .route("/{comment_id}", get(get_comment))
        .route(
            "/{comment_id}/next-expected-command",
            get(next_expected_command_on_a_comment),
        )
        .route("/{comment_id}/commands", post(handle_command))
}
