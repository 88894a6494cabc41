//! PREreview — API error types.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use prereview_core::error::{CommandError, EventStoreError, QueryError};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Database connection or pool error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The tracing pipeline could not be installed.
    #[error("telemetry error: {0}")]
    Telemetry(String),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer error that implements `IntoResponse`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The aggregate refused the command. Carries the rejection message.
    #[error("command rejected: {0}")]
    Rejected(String),

    /// No events exist for the requested resource.
    #[error("resource {0} was not found")]
    NotFound(Uuid),

    /// The request body is not a well-formed command.
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    /// Reading or appending events failed.
    #[error(transparent)]
    Store(EventStoreError),
}

impl<E> From<CommandError<E>> for ApiError
where
    E: std::error::Error + 'static,
{
    fn from(err: CommandError<E>) -> Self {
        match err {
            CommandError::Rejected(rejection) => Self::Rejected(rejection.to_string()),
            CommandError::UnableToHandleCommand(store) => Self::Store(store),
        }
    }
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        Self::Store(err.0)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self {
            Self::Rejected(_) => (StatusCode::BAD_REQUEST, "command_rejected"),
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "resource_not_found"),
            Self::InvalidBody(rejection) => (rejection.status(), "invalid_request_body"),
            Self::Store(EventStoreError::WrongResourceType { .. }) => {
                (StatusCode::NOT_FOUND, "wrong_resource_type")
            }
            Self::Store(EventStoreError::ResourceHasChanged { .. }) => {
                (StatusCode::CONFLICT, "resource_has_changed")
            }
            Self::Store(_) => (StatusCode::SERVICE_UNAVAILABLE, "service_unavailable"),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = ErrorBody {
            error: error_code,
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
