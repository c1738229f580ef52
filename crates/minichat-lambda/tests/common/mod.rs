#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use serde_json::Value;
use tower::ServiceExt;

use minichat_completion::error::CompletionError;
use minichat_completion::service::CompletionService;
use minichat_lambda::state::AppState;
use minichat_storage::memory::MemoryStore;

/// Completion service with a canned outcome.
pub enum Scripted {
    Reply(&'static str),
    Fail,
}

#[async_trait]
impl CompletionService for Scripted {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn complete(&self, _prompt: &str) -> Result<String, CompletionError> {
        match self {
            Scripted::Reply(text) => Ok(text.to_string()),
            Scripted::Fail => Err(CompletionError::Api {
                status: 503,
                body: "upstream unavailable".to_string(),
            }),
        }
    }
}

pub fn test_app(completion: Scripted) -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState {
        store: store.clone(),
        completion: Arc::new(completion),
    };
    (minichat_lambda::app(state), store)
}

pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn post_json(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    into_json(send(app, request).await).await
}

pub async fn post_raw(app: &Router, path: &str, body: &'static str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    into_json(send(app, request).await).await
}

pub async fn get_json(app: &Router, path: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .unwrap();
    into_json(send(app, request).await).await
}

pub async fn into_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
