//! Accept-header negotiation.
//!
//! The API only ever answers in JSON (plain text on the welcome route), so a
//! request whose `Accept` header can take neither gets a 406 before any
//! handler runs.

use axum::extract::Request;
use axum::http::{header, HeaderMap, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use axum::Json;

use crate::api::ErrorResponse;

/// True when the `Accept` header is absent or lists a media range matching
/// `{kind}/{subtype}` (including `{kind}/*` and `*/*`).
pub fn accepts(headers: &HeaderMap, kind: &str, subtype: &str) -> bool {
    let Some(raw) = headers.get(header::ACCEPT).and_then(|v| v.to_str().ok()) else {
        return true;
    };
    let full = format!("{kind}/{subtype}");
    let wildcard = format!("{kind}/*");
    raw.split(',')
        .map(|range| range.split(';').next().unwrap_or("").trim())
        .any(|media| media == full || media == wildcard || media == "*/*")
}

/// Reject requests that cannot accept `application/json`.
pub async fn require_json_accept(
    request: Request,
    next: Next,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    if !accepts(request.headers(), "application", "json") {
        return Err((
            StatusCode::NOT_ACCEPTABLE,
            Json(ErrorResponse {
                error: "this endpoint only serves application/json".to_string(),
            }),
        ));
    }
    Ok(next.run(request).await)
}
