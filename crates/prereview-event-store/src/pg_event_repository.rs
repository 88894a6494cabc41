//! `PostgreSQL` implementation of the `EventRepository` trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use prereview_core::error::EventStoreError;
use prereview_core::repository::{EventRepository, NewEvent, ResourceEvents, StoredEvent};

use crate::schema::CREATE_EVENTS_TABLE;

/// PostgreSQL-backed event repository.
#[derive(Debug, Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

#[derive(Debug, sqlx::FromRow)]
struct EventRow {
    event_id: Uuid,
    resource_id: Uuid,
    resource_type: String,
    resource_version: i64,
    position: i64,
    event_type: String,
    payload: serde_json::Value,
    occurred_at: DateTime<Utc>,
}

impl From<EventRow> for StoredEvent {
    fn from(row: EventRow) -> Self {
        Self {
            event_id: row.event_id,
            resource_id: row.resource_id,
            resource_type: row.resource_type,
            resource_version: row.resource_version,
            position: row.position,
            event_type: row.event_type,
            payload: row.payload,
            occurred_at: row.occurred_at,
        }
    }
}

const SELECT_COLUMNS: &str = "SELECT event_id, resource_id, resource_type, resource_version, \
     position, event_type, payload, occurred_at FROM events";

impl PgEventRepository {
    /// Creates a new `PgEventRepository`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the events table and its indexes if they do not exist yet.
    ///
    /// # Errors
    ///
    /// Returns the underlying `sqlx::Error` if the DDL fails.
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::raw_sql(CREATE_EVENTS_TABLE)
            .execute(&self.pool)
            .await
            .map(|_| ())
    }
}

fn into_stored_events(
    rows: Result<Vec<EventRow>, sqlx::Error>,
) -> Result<Vec<StoredEvent>, EventStoreError> {
    rows.map(|rows| rows.into_iter().map(StoredEvent::from).collect())
        .map_err(|e| EventStoreError::FailedToGetEvents(e.to_string()))
}

#[async_trait]
impl EventRepository for PgEventRepository {
    #[tracing::instrument(skip(self))]
    async fn get_events(&self, resource_id: Uuid) -> Result<ResourceEvents, EventStoreError> {
        let sql = format!("{SELECT_COLUMNS} WHERE resource_id = $1 ORDER BY resource_version");
        let rows = sqlx::query_as::<_, EventRow>(&sql)
            .bind(resource_id)
            .fetch_all(&self.pool)
            .await;
        Ok(ResourceEvents::new(into_stored_events(rows)?))
    }

    #[tracing::instrument(skip(self))]
    async fn get_all_events(&self) -> Result<Vec<StoredEvent>, EventStoreError> {
        let sql = format!("{SELECT_COLUMNS} ORDER BY position");
        let rows = sqlx::query_as::<_, EventRow>(&sql)
            .fetch_all(&self.pool)
            .await;
        into_stored_events(rows)
    }

    #[tracing::instrument(skip(self))]
    async fn get_all_events_of_type(
        &self,
        resource_type: &str,
    ) -> Result<Vec<StoredEvent>, EventStoreError> {
        let sql = format!("{SELECT_COLUMNS} WHERE resource_type = $1 ORDER BY position");
        let rows = sqlx::query_as::<_, EventRow>(&sql)
            .bind(resource_type)
            .fetch_all(&self.pool)
            .await;
        into_stored_events(rows)
    }

    #[tracing::instrument(skip(self, event), fields(event_type = %event.event_type))]
    async fn commit_event(
        &self,
        resource_id: Uuid,
        expected_version: i64,
        event: NewEvent,
    ) -> Result<i64, EventStoreError> {
        let resource_version = expected_version + 1;

        // The version guard rejects stale and ahead-of-stream writers alike;
        // the unique constraint settles writers that pass it concurrently.
        let result = sqlx::query(
            r"
            INSERT INTO events
                (event_id, resource_id, resource_type, resource_version, event_type, payload, occurred_at)
            SELECT $1, $2, $3, $4, $5, $6, $7
            WHERE (SELECT COALESCE(MAX(resource_version), 0) FROM events WHERE resource_id = $2) = $8
            ON CONFLICT (resource_id, resource_version) DO NOTHING
            ",
        )
        .bind(Uuid::now_v7())
        .bind(resource_id)
        .bind(&event.resource_type)
        .bind(resource_version)
        .bind(&event.event_type)
        .bind(&event.payload)
        .bind(event.occurred_at)
        .bind(expected_version)
        .execute(&self.pool)
        .await
        .map_err(|e| EventStoreError::FailedToCommitEvent(e.to_string()))?;

        if result.rows_affected() != 1 {
            tracing::debug!("append rejected by version check");
            return Err(EventStoreError::ResourceHasChanged {
                resource_id,
                expected_version,
            });
        }

        Ok(resource_version)
    }
}
