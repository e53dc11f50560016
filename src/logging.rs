//! Middleware for logging requests and responses.

use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// The number of characters of a request or response body to log at the `info` level.
const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If a body is longer than [LOG_BODY_LENGTH_LIMIT] characters, it is
/// truncated and the full body is logged at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body = match read_body(body).await {
        Some(body) => body,
        None => return StatusCode::BAD_REQUEST.into_response(),
    };

    let body_text = String::from_utf8_lossy(&body);
    let (display_body, is_truncated) = truncate(&body_text);
    tracing::info!(
        "Received request: {} {}\nbody: {display_body:?}{}",
        parts.method,
        parts.uri,
        if is_truncated { "..." } else { "" }
    );
    if is_truncated {
        tracing::debug!("Full request body: {body_text:?}");
    }

    let request = Request::from_parts(parts, Body::from(body));
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let body = match read_body(body).await {
        Some(body) => body,
        None => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    };

    let body_text = String::from_utf8_lossy(&body);
    let (display_body, is_truncated) = truncate(&body_text);
    tracing::info!(
        "Sending response: {}\nbody: {display_body:?}{}",
        parts.status,
        if is_truncated { "..." } else { "" }
    );
    if is_truncated {
        tracing::debug!("Full response body: {body_text:?}");
    }

    Response::from_parts(parts, Body::from(body))
}

async fn read_body(body: Body) -> Option<Bytes> {
    axum::body::to_bytes(body, usize::MAX)
        .await
        .inspect_err(|error| tracing::error!("could not read body: {error}"))
        .ok()
}

/// The first [LOG_BODY_LENGTH_LIMIT] characters of `text` and whether any
/// characters were cut off.
fn truncate(text: &str) -> (&str, bool) {
    match text.char_indices().nth(LOG_BODY_LENGTH_LIMIT) {
        Some((end, _)) => (&text[..end], true),
        None => (text, false),
    }
}
