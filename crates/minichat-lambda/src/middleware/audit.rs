use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::Instrument;
use uuid::Uuid;

/// Audit logging middleware.
///
/// Logs every API request as a structured event using `tracing`, inside a
/// span carrying a fresh request ID so handler logs can be correlated.
/// Under Lambda these events flow to CloudWatch through the JSON subscriber.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().path().to_string();
    let request_id = Uuid::new_v4();

    let span = tracing::info_span!("request", request_id = %request_id);
    let response = next.run(req).instrument(span).await;

    let status = response.status().as_u16();
    tracing::info!(
        request_id = %request_id,
        method = %method,
        path = %uri,
        status = status,
        "api_request"
    );

    response
}
