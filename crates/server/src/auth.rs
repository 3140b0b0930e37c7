//! Bearer-token check for the write routes.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use axum::Json;
use tracing::warn;

use crate::api::ErrorResponse;
use crate::state::AppState;

pub async fn require_admin(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    match token {
        Some(token) if !state.admin_token.is_empty() && token == state.admin_token => {
            Ok(next.run(request).await)
        }
        _ => {
            warn!(path = %request.uri().path(), "rejected unauthorized write");
            Err((
                StatusCode::FORBIDDEN,
                Json(ErrorResponse {
                    error: "Not authorized".to_string(),
                }),
            ))
        }
    }
}
