//! Middleware for logging requests and responses.

use axum::{
    body::Body,
    extract::Request,
    http::{Method, header::CONTENT_TYPE},
    middleware::Next,
    response::Response,
};

/// Bodies longer than this many bytes are truncated at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Form fields whose values never appear in the logs.
const REDACTED_FIELDS: [&str; 2] = ["password", "confirm_password"];

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If the body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and the full body is logged at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body_text) = match read_body(request.into_parts()).await {
        Ok(parts_and_body) => parts_and_body,
        Err((parts, error)) => {
            tracing::warn!("Could not read request body for logging: {error}");
            return next.run(Request::from_parts(parts, Body::empty())).await;
        }
    };

    let is_form = parts.method == Method::POST
        && parts
            .headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

    if is_form {
        log_request(&parts, &redact_form(&body_text));
    } else {
        log_request(&parts, &body_text);
    }

    let response = next.run(Request::from_parts(parts, body_text.into())).await;

    let (parts, body) = response.into_parts();
    match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            let body_text = String::from_utf8_lossy(&bytes).to_string();
            log_response(&parts, &body_text);
            Response::from_parts(parts, body_text.into())
        }
        Err(error) => {
            tracing::error!("Could not read response body for logging: {error}");
            Response::from_parts(parts, Body::empty())
        }
    }
}

async fn read_body(
    (parts, body): (axum::http::request::Parts, Body),
) -> Result<(axum::http::request::Parts, String), (axum::http::request::Parts, axum::Error)> {
    match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => Ok((parts, String::from_utf8_lossy(&bytes).to_string())),
        Err(error) => Err((parts, error)),
    }
}

/// Replace the value of every sensitive field in a URL-encoded form.
fn redact_form(form_text: &str) -> String {
    form_text
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((name, _)) if REDACTED_FIELDS.contains(&name) => format!("{name}=********"),
            _ => pair.to_owned(),
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn truncate(body: &str) -> &str {
    let mut end = LOG_BODY_LENGTH_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }

    &body[..end]
}

fn log_request(parts: &axum::http::request::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Received request: {} {}\nbody: {}...",
            parts.method,
            parts.uri,
            truncate(body)
        );
        tracing::debug!("Full request body: {body:?}");
    } else {
        tracing::info!(
            "Received request: {} {}\nbody: {body:?}",
            parts.method,
            parts.uri
        );
    }
}

fn log_response(parts: &axum::http::response::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Sending response: {}\nbody: {}...",
            parts.status,
            truncate(body)
        );
        tracing::debug!("Full response body: {body:?}");
    } else {
        tracing::info!("Sending response: {}\nbody: {body:?}", parts.status);
    }
}
