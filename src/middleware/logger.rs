use axum::{
    http::{HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Tags each request with an id and logs its outcome.
pub async fn logger<B>(mut req: Request<B>, next: Next<B>) -> Response {
    let request_id = Uuid::new_v4();
    req.extensions_mut().insert(request_id);

    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = Instant::now();

    let mut response = next.run(req).await;
    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis();

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }

    if status.is_server_error() {
        warn!(request_id = %request_id, method = %method, uri = %uri, status = status.as_u16(), elapsed_ms, "Request failed");
    } else {
        info!(request_id = %request_id, method = %method, uri = %uri, status = status.as_u16(), elapsed_ms, "Request log");
    }
    response
}
