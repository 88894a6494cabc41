//! PREreview API server entry point.

use std::sync::Arc;

use prereview_api::config::AppConfig;
use prereview_api::error::AppError;
use prereview_api::state::AppState;
use prereview_api::{subscribers, telemetry};
use prereview_core::clock::SystemClock;
use prereview_core::repository::EventRepository;
use prereview_event_store::memory_event_repository::InMemoryEventRepository;
use prereview_event_store::pg_event_repository::PgEventRepository;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    let tracer_provider = telemetry::init_tracing(config.otel_exporter_otlp_endpoint.as_deref())?;

    tracing::info!("Starting PREreview API server");

    let event_repository: Arc<dyn EventRepository> = match &config.database_url {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.database_max_connections)
                .connect(database_url)
                .await?;
            let repository = PgEventRepository::new(pool);
            repository.ensure_schema().await?;
            Arc::new(repository)
        }
        None => {
            tracing::warn!("DATABASE_URL is not set; events are kept in memory only");
            Arc::new(InMemoryEventRepository::new())
        }
    };

    let app_state = AppState::new(
        Arc::new(SystemClock),
        event_repository,
        config.event_bus_capacity,
    );
    let _subscribers = subscribers::spawn_all(&app_state);

    let app = prereview_api::app(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(provider) = tracer_provider {
        provider
            .shutdown()
            .map_err(|e| AppError::Telemetry(e.to_string()))?;
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
