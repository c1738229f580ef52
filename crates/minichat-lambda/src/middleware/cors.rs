use axum::extract::Request;
use axum::http::Method;
use axum::middleware::Next;
use axum::response::Response;

use crate::routes;

/// Answer every `OPTIONS` request with the static preflight response,
/// whatever the path.
pub async fn preflight(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        return routes::preflight::preflight().await;
    }

    next.run(req).await
}
