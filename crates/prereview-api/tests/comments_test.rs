//! Integration tests for the comment endpoints.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use prereview_comments::domain::aggregates::Comment;
use prereview_comments::domain::events::{CommentEvent, CommentWasStarted};
use prereview_core::values::Orcid;
use prereview_test_support::{ConflictingEventRepository, stored_history};
use serde_json::json;
use uuid::Uuid;

const AUTHOR: &str = "0000-0002-1825-0097";

fn commands_uri(comment_id: Uuid) -> String {
    format!("/api/v1/comments/{comment_id}/commands")
}

fn start() -> serde_json::Value {
    json!({ "type": "start_comment", "author_id": AUTHOR, "prereview_id": 42 })
}

#[tokio::test]
async fn test_next_expected_command_follows_the_draft() {
    // Arrange
    let app = common::build_test_app();
    let comment_id = Uuid::new_v4();
    let for_user = format!(
        "/api/v1/comments/next-expected-command?author_id={AUTHOR}&prereview_id=42"
    );

    // Act
    let (_, before) = common::get_json(app.clone(), &for_user).await;
    common::post_json(app.clone(), &commands_uri(comment_id), &start()).await;
    let (_, after_start) = common::get_json(app.clone(), &for_user).await;
    common::post_json(
        app.clone(),
        &commands_uri(comment_id),
        &json!({ "type": "enter_comment", "comment": "<p>Agreed.</p>" }),
    )
    .await;
    let (status, after_entry) = common::get_json(
        app,
        &format!("/api/v1/comments/{comment_id}/next-expected-command"),
    )
    .await;

    // Assert
    assert_eq!(before, json!({ "type": "expected_to_start_a_comment" }));
    assert_eq!(
        after_start,
        json!({ "type": "expected_to_enter_a_comment", "comment_id": comment_id })
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(after_entry["type"], "expected_to_choose_a_persona");
}

#[tokio::test]
async fn test_comment_is_published_after_doi_assignment() {
    // Arrange
    let app = common::build_test_app();
    let comment_id = Uuid::new_v4();
    let drafting = [
        start(),
        json!({ "type": "enter_comment", "comment": "<p>Agreed.</p>" }),
        json!({ "type": "choose_persona", "persona": "public" }),
        json!({ "type": "declare_competing_interests", "competing_interests": "none" }),
        json!({ "type": "agree_to_code_of_conduct" }),
        json!({ "type": "confirm_existence_of_verified_email_address" }),
        json!({ "type": "publish_comment" }),
    ];
    for command in &drafting {
        let (status, _) = common::post_json(app.clone(), &commands_uri(comment_id), command).await;
        assert_eq!(status, StatusCode::OK);
    }

    // Act
    let (_, in_need) = common::get_json(app.clone(), "/api/v1/comments/in-need-of-a-doi").await;
    let (early, rejected) = common::post_json(
        app.clone(),
        &commands_uri(comment_id),
        &json!({ "type": "mark_comment_as_published" }),
    )
    .await;
    common::post_json(
        app.clone(),
        &commands_uri(comment_id),
        &json!({ "type": "mark_doi_as_assigned", "id": 107, "doi": "10.5072/zenodo.107" }),
    )
    .await;
    let (status, outcome) = common::post_json(
        app.clone(),
        &commands_uri(comment_id),
        &json!({ "type": "mark_comment_as_published" }),
    )
    .await;

    // Assert
    assert_eq!(in_need["comment_id"], comment_id.to_string());
    assert_eq!(early, StatusCode::BAD_REQUEST);
    assert_eq!(rejected["message"], "command rejected: doi is not assigned");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(outcome["resource_version"], 9);
    assert_eq!(outcome["event_type"], "comment.comment_was_published");
    let (_, view) = common::get_json(app, &format!("/api/v1/comments/{comment_id}")).await;
    assert_eq!(view["state"]["status"], "published");
}

#[tokio::test]
async fn test_lost_race_returns_409() {
    // Arrange
    let comment_id = Uuid::new_v4();
    let history = stored_history::<Comment>(&[(
        comment_id,
        CommentEvent::CommentWasStarted(CommentWasStarted {
            author_id: Orcid::new(AUTHOR),
            prereview_id: 42,
        }),
    )]);
    let app = common::build_test_app_with(Arc::new(ConflictingEventRepository::new(history)));

    // Act
    let (status, json) = common::post_json(
        app,
        &commands_uri(comment_id),
        &json!({ "type": "enter_comment", "comment": "<p>Agreed.</p>" }),
    )
    .await;

    // Assert
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"], "resource_has_changed");
}
