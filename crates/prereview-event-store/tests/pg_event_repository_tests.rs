//! Integration tests for `PgEventRepository`.
//!
//! These need a PostgreSQL server reachable through `DATABASE_URL`; run them
//! with `cargo test -- --ignored`.

use chrono::{TimeZone, Utc};
use prereview_core::error::EventStoreError;
use prereview_core::repository::{EventRepository, NewEvent};
use prereview_event_store::pg_event_repository::PgEventRepository;
use sqlx::PgPool;
use uuid::Uuid;

/// Helper to build a `NewEvent` with sensible defaults.
fn make_new_event(resource_type: &str, payload: serde_json::Value) -> NewEvent {
    NewEvent {
        resource_type: resource_type.to_owned(),
        event_type: "test.event".to_owned(),
        payload,
        occurred_at: Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
    }
}

// --- get_events ---

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires PostgreSQL"]
async fn test_get_events_returns_empty_history_for_unknown_resource(pool: PgPool) {
    let repo = PgEventRepository::new(pool);

    let history = repo.get_events(Uuid::new_v4()).await.unwrap();

    assert!(history.events.is_empty());
    assert_eq!(history.latest_version, 0);
}

// --- commit_event + get_events round-trip ---

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires PostgreSQL"]
async fn test_commit_and_load_single_event(pool: PgPool) {
    let repo = PgEventRepository::new(pool);
    let resource_id = Uuid::new_v4();
    let event = make_new_event("feedback", serde_json::json!({"key": "value"}));
    let expected_occurred_at = event.occurred_at;

    let version = repo.commit_event(resource_id, 0, event).await.unwrap();

    assert_eq!(version, 1);
    let history = repo.get_events(resource_id).await.unwrap();
    assert_eq!(history.latest_version, 1);
    assert_eq!(history.events.len(), 1);

    let e = &history.events[0];
    assert_eq!(e.resource_id, resource_id);
    assert_eq!(e.resource_type, "feedback");
    assert_eq!(e.event_type, "test.event");
    assert_eq!(e.payload, serde_json::json!({"key": "value"}));
    assert_eq!(e.resource_version, 1);
    assert_eq!(e.occurred_at, expected_occurred_at);
}

// --- monotonicity ---

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires PostgreSQL"]
async fn test_sequential_commits_return_consecutive_versions(pool: PgPool) {
    let repo = PgEventRepository::new(pool);
    let resource_id = Uuid::new_v4();

    for expected in 0..3 {
        let version = repo
            .commit_event(resource_id, expected, make_new_event("feedback", serde_json::json!({})))
            .await
            .unwrap();
        assert_eq!(version, expected + 1);
    }

    let history = repo.get_events(resource_id).await.unwrap();
    for (i, event) in history.events.iter().enumerate() {
        assert_eq!(event.resource_version, i64::try_from(i + 1).unwrap());
    }
}

// --- concurrency ---

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires PostgreSQL"]
async fn test_concurrent_commits_at_same_version_admit_exactly_one(pool: PgPool) {
    let repo = PgEventRepository::new(pool);
    let resource_id = Uuid::new_v4();

    let (left, right) = tokio::join!(
        repo.commit_event(resource_id, 0, make_new_event("feedback", serde_json::json!({"w": "left"}))),
        repo.commit_event(resource_id, 0, make_new_event("feedback", serde_json::json!({"w": "right"}))),
    );

    let successes = [&left, &right].iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1);
    let loser = if left.is_ok() { right } else { left };
    assert!(matches!(
        loser,
        Err(EventStoreError::ResourceHasChanged {
            expected_version: 0,
            ..
        })
    ));

    let history = repo.get_events(resource_id).await.unwrap();
    assert_eq!(history.events.len(), 1);
    assert_eq!(history.latest_version, 1);
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires PostgreSQL"]
async fn test_stale_expected_version_is_rejected(pool: PgPool) {
    let repo = PgEventRepository::new(pool);
    let resource_id = Uuid::new_v4();
    for expected in 0..2 {
        repo.commit_event(resource_id, expected, make_new_event("feedback", serde_json::json!({})))
            .await
            .unwrap();
    }

    let result = repo
        .commit_event(resource_id, 0, make_new_event("feedback", serde_json::json!({})))
        .await;

    match result {
        Err(EventStoreError::ResourceHasChanged {
            resource_id: conflict_id,
            expected_version,
        }) => {
            assert_eq!(conflict_id, resource_id);
            assert_eq!(expected_version, 0);
        }
        other => panic!("expected ResourceHasChanged, got {other:?}"),
    }
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires PostgreSQL"]
async fn test_expected_version_ahead_of_stream_is_rejected(pool: PgPool) {
    let repo = PgEventRepository::new(pool);
    let resource_id = Uuid::new_v4();

    let result = repo
        .commit_event(resource_id, 3, make_new_event("feedback", serde_json::json!({})))
        .await;

    assert!(matches!(
        result,
        Err(EventStoreError::ResourceHasChanged { .. })
    ));
    assert!(repo.get_events(resource_id).await.unwrap().events.is_empty());
}

// --- whole log ---

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires PostgreSQL"]
async fn test_get_all_events_is_ordered_by_position_and_filterable(pool: PgPool) {
    let repo = PgEventRepository::new(pool);
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();

    repo.commit_event(a, 0, make_new_event("feedback", serde_json::json!({})))
        .await
        .unwrap();
    repo.commit_event(b, 0, make_new_event("comment", serde_json::json!({})))
        .await
        .unwrap();
    repo.commit_event(a, 1, make_new_event("feedback", serde_json::json!({})))
        .await
        .unwrap();

    let all = repo.get_all_events().await.unwrap();
    let owners: Vec<Uuid> = all.iter().map(|e| e.resource_id).collect();
    assert_eq!(owners, vec![a, b, a]);
    assert!(all.windows(2).all(|w| w[0].position < w[1].position));

    let comments = repo.get_all_events_of_type("comment").await.unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].resource_id, b);
}

// --- schema bootstrap ---

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires PostgreSQL"]
async fn test_ensure_schema_is_idempotent(pool: PgPool) {
    let repo = PgEventRepository::new(pool);

    repo.ensure_schema().await.unwrap();
    repo.ensure_schema().await.unwrap();
}
