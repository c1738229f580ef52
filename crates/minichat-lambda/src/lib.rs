//! minichat-lambda library root.
//!
//! Exposes the router so integration tests can drive every handler
//! in-process against an in-memory store.

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::http::HeaderValue;
use axum::http::header::{ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_ORIGIN};
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::set_header::SetResponseHeaderLayer;

use state::AppState;

/// Build the full HTTP surface.
pub fn app(state: AppState) -> Router {
    app_for_stage(state, None)
}

/// Build the HTTP surface, also serving every route under `/{stage}`.
///
/// `lambda_http` prepends the stage name to the path of API Gateway events
/// from a named stage, so `/dev/chat` must reach the same handler as `/chat`.
/// `$default` and empty names add no prefix.
pub fn app_for_stage(state: AppState, stage: Option<&str>) -> Router {
    let mut router = api_routes();
    if let Some(stage) = stage
        .map(|s| s.trim_matches('/'))
        .filter(|s| !s.is_empty() && *s != "$default")
    {
        router = router.nest(&format!("/{stage}"), api_routes());
    }

    router
        .fallback(routes::not_found)
        .layer(axum_mw::from_fn(middleware::cors::preflight))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        ))
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/chat", post(routes::chat::chat))
        .route("/user-chat", post(routes::user_chat::send_message))
        .route("/user-chat-history", post(routes::user_chat::history))
        .route("/users", get(routes::users::list_users))
        .route("/register-user", post(routes::users::register_user))
}
