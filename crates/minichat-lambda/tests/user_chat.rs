mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{Scripted, post_json, post_raw, test_app};
use minichat_core::models::peer_message::PeerMessage;
use minichat_storage::store::ChatStore;

#[tokio::test]
async fn sent_message_appears_in_history() {
    let (app, _store) = test_app(Scripted::Reply("unused"));

    let (status, body) = post_json(
        &app,
        "/user-chat",
        json!({"senderId": "u1", "receiverId": "u2", "message": "hi"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["chatHistory"][0]["message"], "hi");

    let (status, body) = post_json(
        &app,
        "/user-chat-history",
        json!({"userId": "u1", "otherUserId": "u2"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["message"], "hi");
    assert_eq!(messages[0]["senderId"], "u1");
    assert_eq!(messages[0]["receiverId"], "u2");
}

#[tokio::test]
async fn thread_is_one_directional() {
    let (app, _store) = test_app(Scripted::Reply("unused"));

    post_json(
        &app,
        "/user-chat",
        json!({"senderId": "u1", "receiverId": "u2", "message": "from u1"}),
    )
    .await;
    let (_, body) = post_json(
        &app,
        "/user-chat",
        json!({"senderId": "u2", "receiverId": "u1", "message": "from u2"}),
    )
    .await;

    // u2's view only contains what u2 sent to u1.
    let thread = body["chatHistory"].as_array().unwrap();
    assert_eq!(thread.len(), 1);
    assert!(
        thread
            .iter()
            .all(|m| m["senderId"] == "u2" && m["receiverId"] == "u1")
    );

    let (_, body) = post_json(
        &app,
        "/user-chat-history",
        json!({"userId": "u1", "otherUserId": "u2"}),
    )
    .await;
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["message"], "from u1");
}

#[tokio::test]
async fn history_never_exceeds_fifty() {
    let (app, store) = test_app(Scripted::Reply("unused"));
    for minute in 0..60 {
        store
            .put_peer_message(&PeerMessage::new(
                "u1",
                "u2",
                "m",
                format!("2024-01-01T00:{minute:02}:00.000Z"),
            ))
            .await
            .unwrap();
    }

    let (_, body) = post_json(
        &app,
        "/user-chat-history",
        json!({"userId": "u1", "otherUserId": "u2"}),
    )
    .await;

    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 50);
    assert_eq!(messages[0]["timestamp"], "2024-01-01T00:00:00.000Z");
}

#[tokio::test]
async fn history_does_not_write() {
    let (app, store) = test_app(Scripted::Reply("unused"));

    let (status, body) = post_json(
        &app,
        "/user-chat-history",
        json!({"userId": "u1", "otherUserId": "u2"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["messages"], json!([]));
    assert!(store.peer_rows().await.is_empty());
}

#[tokio::test]
async fn missing_body_is_rejected_without_writes() {
    let (app, store) = test_app(Scripted::Reply("unused"));

    let (status, _) = post_raw(&app, "/user-chat", "").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_raw(&app, "/user-chat-history", "   ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(store.peer_rows().await.is_empty());
}

#[tokio::test]
async fn missing_receiver_is_rejected() {
    let (app, store) = test_app(Scripted::Reply("unused"));

    let (status, _) = post_json(
        &app,
        "/user-chat",
        json!({"senderId": "u1", "message": "hi"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(store.peer_rows().await.is_empty());
}
