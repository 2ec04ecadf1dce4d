use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use http_body_util::BodyExt;

use crate::shared::structs::AppState;
use crate::shared::utility::signature::verify;

pub const SIGNATURE_HEADER: &str = "X-Signature-Ed25519";
pub const TIMESTAMP_HEADER: &str = "X-Signature-Timestamp";

/// Rejects any request whose body was not signed by Discord before a handler sees it.
pub async fn validate_interaction(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    request: axum::extract::Request,
    next: Next,
) -> Response {
    let signature = match header_value(&headers, SIGNATURE_HEADER) {
        Ok(value) => value,
        Err(e) => return e,
    };

    let timestamp = match header_value(&headers, TIMESTAMP_HEADER) {
        Ok(value) => value,
        Err(e) => return e,
    };

    match buffer_request_body(request, &signature, &timestamp, &app_state.public_key).await {
        Ok(request) => next.run(request).await,
        Err(e) => e,
    }
}

#[allow(clippy::result_large_err)]
fn header_value(headers: &HeaderMap, name: &str) -> Result<String, Response> {
    let Some(value) = headers.get(name) else {
        tracing::warn!("Rejected interaction without {} header", name);
        return Err((StatusCode::UNAUTHORIZED, "unauthorized").into_response());
    };

    value.to_str().map(ToString::to_string).map_err(|e| {
        let error_msg = format!("Malformed {name} header: {e:?}");
        tracing::warn!("{}", &error_msg);
        (StatusCode::BAD_REQUEST, error_msg).into_response()
    })
}

async fn buffer_request_body(
    request: axum::extract::Request,
    signature: &str,
    timestamp: &str,
    public_key: &str,
) -> Result<axum::extract::Request, Response> {
    let (parts, body) = request.into_parts();

    let bytes = body
        .collect()
        .await
        .map_err(|e| {
            let error_msg = format!("Failed to read request body: {e:?}");
            tracing::error!("{}", &error_msg);
            (StatusCode::BAD_REQUEST, error_msg).into_response()
        })?
        .to_bytes();

    match validate(bytes, signature, timestamp, public_key) {
        Ok(bytes) => Ok(axum::extract::Request::from_parts(parts, Body::from(bytes))),
        Err(e) => Err(e),
    }
}

#[allow(clippy::result_large_err)]
fn validate(bytes: Bytes, signature: &str, timestamp: &str, public_key: &str) -> Result<Bytes, Response> {
    if verify(signature, timestamp, &bytes, public_key) {
        Ok(bytes)
    } else {
        tracing::warn!("Interaction signature verification failed");
        Err((StatusCode::UNAUTHORIZED, "unauthorized").into_response())
    }
}
