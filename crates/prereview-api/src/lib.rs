//! PREreview — HTTP host.
//!
//! A thin axum layer over the aggregate crates: JSON commands in, JSON read
//! models out. Page flows, templates and external collaborators are not part
//! of this crate; the event-bus subscribers are where they attach.

use axum::Router;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod subscribers;
pub mod telemetry;

/// Builds the application router with every route mounted.
pub fn app(state: state::AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/feedback", routes::feedback::router())
        .nest("/api/v1/comments", routes::comments::router())
        .nest("/api/v1/dataset-reviews", routes::dataset_reviews::router())
        .with_state(state)
}
