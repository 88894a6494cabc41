//! HTTP route handlers, one module per bounded context.

use axum::extract::FromRequest;
use prereview_core::command::CommandOutcome;
use prereview_core::event::DomainEvent;
use serde::Serialize;
use uuid::Uuid;

use crate::error::ApiError;

pub mod comments;
pub mod dataset_reviews;
pub mod feedback;
pub mod health;

/// Response body returned after a command is successfully handled.
#[derive(Debug, Serialize)]
pub struct CommandResponse {
    /// The resource the event was appended to.
    pub resource_id: Uuid,
    /// The version the event was committed at.
    pub resource_version: i64,
    /// Type of the committed event.
    pub event_type: &'static str,
}

impl<E: DomainEvent> From<CommandOutcome<E>> for CommandResponse {
    fn from(outcome: CommandOutcome<E>) -> Self {
        Self {
            resource_id: outcome.resource_id,
            resource_version: outcome.resource_version,
            event_type: outcome.event.event_type(),
        }
    }
}

/// JSON body extractor whose rejections render as an `ApiError` body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct CommandJson<T>(pub T);
