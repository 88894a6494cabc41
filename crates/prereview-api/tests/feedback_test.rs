//! Integration tests for the feedback endpoints.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use prereview_test_support::FailingEventRepository;
use serde_json::json;
use uuid::Uuid;

const AUTHOR: &str = "0000-0002-1825-0097";

fn commands_uri(feedback_id: Uuid) -> String {
    format!("/api/v1/feedback/{feedback_id}/commands")
}

fn start() -> serde_json::Value {
    json!({ "type": "start_feedback", "author_id": AUTHOR, "prereview_id": 42 })
}

#[tokio::test]
async fn test_start_feedback_returns_first_version() {
    // Arrange
    let app = common::build_test_app();
    let feedback_id = Uuid::new_v4();

    // Act
    let (status, json) = common::post_json(app, &commands_uri(feedback_id), &start()).await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["resource_id"], feedback_id.to_string());
    assert_eq!(json["resource_version"], 1);
    assert_eq!(json["event_type"], "feedback.feedback_was_started");
}

#[tokio::test]
async fn test_starting_twice_is_rejected_and_leaves_version_unchanged() {
    // Arrange
    let app = common::build_test_app();
    let feedback_id = Uuid::new_v4();
    common::post_json(app.clone(), &commands_uri(feedback_id), &start()).await;

    // Act
    let (status, json) =
        common::post_json(app.clone(), &commands_uri(feedback_id), &start()).await;

    // Assert
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "command_rejected");
    assert_eq!(json["message"], "command rejected: feedback was already started");
    let (_, view) = common::get_json(app, &format!("/api/v1/feedback/{feedback_id}")).await;
    assert_eq!(view["version"], 1);
    assert_eq!(view["state"]["status"], "in_progress");
}

#[tokio::test]
async fn test_feedback_moves_through_publication() {
    // Arrange
    let app = common::build_test_app();
    let feedback_id = Uuid::new_v4();
    let commands = [
        start(),
        json!({ "type": "enter_feedback", "feedback": "<p>Thanks for the review.</p>" }),
        json!({ "type": "choose_persona", "persona": "pseudonym" }),
        json!({ "type": "agree_to_code_of_conduct" }),
    ];
    for command in &commands {
        let (status, _) = common::post_json(app.clone(), &commands_uri(feedback_id), command).await;
        assert_eq!(status, StatusCode::OK);
    }

    // Act
    let (requested, _) = common::post_json(
        app.clone(),
        &commands_uri(feedback_id),
        &json!({ "type": "publish_feedback" }),
    )
    .await;
    let (_, waiting) =
        common::get_json(app.clone(), "/api/v1/feedback/waiting-to-be-published").await;
    let (published, outcome) = common::post_json(
        app.clone(),
        &commands_uri(feedback_id),
        &json!({ "type": "mark_feedback_as_published", "id": 107, "doi": "10.5072/zenodo.107" }),
    )
    .await;

    // Assert
    assert_eq!(requested, StatusCode::OK);
    assert_eq!(waiting["feedback_id"], feedback_id.to_string());
    assert_eq!(published, StatusCode::OK);
    assert_eq!(outcome["resource_version"], 6);
    let (_, persona) =
        common::get_json(app.clone(), &format!("/api/v1/feedback/{feedback_id}/persona")).await;
    assert_eq!(persona["persona"], "pseudonym");
    let (_, after) = common::get_json(app, "/api/v1/feedback/waiting-to-be-published").await;
    assert!(after["feedback_id"].is_null());
}

#[tokio::test]
async fn test_unpublished_feedback_is_listed_per_author_and_prereview() {
    // Arrange
    let app = common::build_test_app();
    let feedback_id = Uuid::new_v4();
    common::post_json(app.clone(), &commands_uri(feedback_id), &start()).await;

    // Act
    let (status, json) = common::get_json(
        app.clone(),
        &format!("/api/v1/feedback/unpublished?author_id={AUTHOR}&prereview_id=42"),
    )
    .await;
    let (_, other) = common::get_json(
        app,
        &format!("/api/v1/feedback/unpublished?author_id={AUTHOR}&prereview_id=43"),
    )
    .await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["feedback_id"], feedback_id.to_string());
    assert_eq!(other, json!([]));
}

#[tokio::test]
async fn test_unknown_feedback_returns_404() {
    let app = common::build_test_app();
    let feedback_id = Uuid::new_v4();

    let (status, json) = common::get_json(app, &format!("/api/v1/feedback/{feedback_id}")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "resource_not_found");
}

#[tokio::test]
async fn test_store_fault_returns_503() {
    let app = common::build_test_app_with(Arc::new(FailingEventRepository));

    let (status, json) = common::post_json(app, &commands_uri(Uuid::new_v4()), &start()).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"], "service_unavailable");
}

#[tokio::test]
async fn test_unknown_command_type_returns_json_error_body() {
    // Arrange
    let app = common::build_test_app();
    let body = json!({ "type": "fly_to_the_moon" });

    // Act
    let (status, json) = common::post_json(app, &commands_uri(Uuid::new_v4()), &body).await;

    // Assert
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"], "invalid_request_body");
    assert!(
        json["message"]
            .as_str()
            .is_some_and(|message| message.starts_with("invalid request body:"))
    );
}

#[tokio::test]
async fn test_reading_a_comment_as_feedback_returns_404() {
    // Arrange
    let app = common::build_test_app();
    let comment_id = Uuid::new_v4();
    let start_comment =
        json!({ "type": "start_comment", "author_id": AUTHOR, "prereview_id": 42 });
    common::post_json(
        app.clone(),
        &format!("/api/v1/comments/{comment_id}/commands"),
        &start_comment,
    )
    .await;

    // Act
    let (status, json) = common::get_json(app, &format!("/api/v1/feedback/{comment_id}")).await;

    // Assert
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "wrong_resource_type");
}
