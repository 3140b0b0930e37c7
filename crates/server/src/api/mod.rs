//! HTTP endpoint modules.
//!
//! Handlers stay thin: extract, call the catalog service, translate its
//! failure kind to a status code. Shared types and the error translation
//! live here in mod.rs.

pub mod doc;
mod gifs;
mod welcome;

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use happycat_core::CatalogError;

// ── Shared types ─────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Translate a catalog failure kind to its status code. The kinds are the
/// service's contract; the mapping is owned here in the routing layer.
pub(crate) fn error_response(err: CatalogError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &err {
        CatalogError::NotFound(_) | CatalogError::EmptyCatalog => StatusCode::NOT_FOUND,
        CatalogError::Conflict(_) => StatusCode::CONFLICT,
        CatalogError::ReservedIdentifier => StatusCode::METHOD_NOT_ALLOWED,
        CatalogError::InvalidIdentifier(_)
        | CatalogError::MissingBody
        | CatalogError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        CatalogError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

// ── Re-exports ───────────────────────────────────────────────────
// Preserves flat `api::foo` import paths used by route registration.

pub use gifs::{create_gif, delete_gif, gif_by_name, list_gifs, random_gif, update_gif};
pub use welcome::welcome;
