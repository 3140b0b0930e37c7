//! GIF catalog endpoints: list, random draw, name lookup, and the three
//! authenticated writes.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use happycat_core::{GifCollection, GifPatch, GifRecord, NewGif};

use crate::state::AppState;

use super::{error_response, ErrorResponse};

#[derive(Deserialize)]
pub struct ListParams {
    pub tag: Option<String>,
}

/// List GIFs, optionally filtered to one tag
///
/// Without `tag` this returns the whole catalog (capped, no pagination).
/// With `tag` it returns every GIF in that tag's bucket, or 404 when the
/// bucket is empty.
#[utoipa::path(
    get,
    path = "/gifs",
    tag = "GIFs",
    params(
        ("tag" = Option<String>, Query, description = "Return only GIFs carrying this tag")
    ),
    responses(
        (status = 200, description = "Matching GIFs", body = GifCollection),
        (status = 404, description = "No GIF carries the requested tag", body = ErrorResponse)
    )
)]
pub async fn list_gifs(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<GifCollection>, (StatusCode, Json<ErrorResponse>)> {
    let gifs = match params.tag.as_deref() {
        Some(tag) => state.service.get_by_tag(tag).await,
        None => state.service.get_all().await,
    }
    .map_err(error_response)?;
    Ok(Json(GifCollection { gifs }))
}

/// Draw one GIF uniformly at random
///
/// Successive calls are independent draws.
#[utoipa::path(
    get,
    path = "/gifs/random",
    tag = "GIFs",
    responses(
        (status = 200, description = "One randomly chosen GIF", body = GifRecord),
        (status = 404, description = "Catalog is empty", body = ErrorResponse)
    )
)]
pub async fn random_gif(
    State(state): State<Arc<AppState>>,
) -> Result<Json<GifRecord>, (StatusCode, Json<ErrorResponse>)> {
    let gif = state.service.get_random().await.map_err(error_response)?;
    Ok(Json(gif))
}

/// Look one GIF up by its exact name
#[utoipa::path(
    get,
    path = "/gifs/{name}",
    tag = "GIFs",
    params(
        ("name" = String, Path, description = "GIF name, matched case-sensitively")
    ),
    responses(
        (status = 200, description = "The named GIF", body = GifRecord),
        (status = 404, description = "No GIF has that name", body = ErrorResponse)
    )
)]
pub async fn gif_by_name(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<GifRecord>, (StatusCode, Json<ErrorResponse>)> {
    let gif = state
        .service
        .get_by_name(&name)
        .await
        .map_err(error_response)?;
    Ok(Json(gif))
}

/// Add a GIF to the catalog
///
/// Assigns a fresh id. Name and URL must be unique across the catalog.
#[utoipa::path(
    post,
    path = "/gifs",
    tag = "GIFs",
    request_body = NewGif,
    responses(
        (status = 201, description = "Stored GIF including its new id", body = GifRecord),
        (status = 403, description = "Missing or wrong bearer token", body = ErrorResponse),
        (status = 409, description = "Duplicate name or URL", body = ErrorResponse),
        (status = 422, description = "Missing field or malformed URL", body = ErrorResponse)
    )
)]
pub async fn create_gif(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewGif>,
) -> Result<(StatusCode, Json<GifRecord>), (StatusCode, Json<ErrorResponse>)> {
    let stored = state.service.add(payload).await.map_err(error_response)?;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// Update a GIF field-by-field
///
/// Only fields present (and non-null) in the body are applied; an empty
/// patch is valid and returns the record unchanged.
#[utoipa::path(
    put,
    path = "/gifs/{id}",
    tag = "GIFs",
    params(
        ("id" = String, Path, description = "24-hex-character GIF id")
    ),
    request_body = GifPatch,
    responses(
        (status = 200, description = "Stored GIF reflecting the merge", body = GifRecord),
        (status = 403, description = "Missing or wrong bearer token", body = ErrorResponse),
        (status = 404, description = "No GIF has that id", body = ErrorResponse),
        (status = 405, description = "The id `random` is reserved", body = ErrorResponse),
        (status = 409, description = "Duplicate name or URL", body = ErrorResponse),
        (status = 422, description = "Malformed id, missing body, or bad field", body = ErrorResponse)
    )
)]
pub async fn update_gif(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Option<Json<GifPatch>>,
) -> Result<Json<GifRecord>, (StatusCode, Json<ErrorResponse>)> {
    let patch = payload.map(|Json(patch)| patch);
    let updated = state
        .service
        .update(&id, patch)
        .await
        .map_err(error_response)?;
    Ok(Json(updated))
}

/// Delete a GIF by id
#[utoipa::path(
    delete,
    path = "/gifs/{id}",
    tag = "GIFs",
    params(
        ("id" = String, Path, description = "24-hex-character GIF id")
    ),
    responses(
        (status = 204, description = "GIF removed"),
        (status = 403, description = "Missing or wrong bearer token", body = ErrorResponse),
        (status = 404, description = "No GIF has that id", body = ErrorResponse),
        (status = 405, description = "The id `random` is reserved", body = ErrorResponse),
        (status = 422, description = "Malformed id", body = ErrorResponse)
    )
)]
pub async fn delete_gif(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    state.service.delete(&id).await.map_err(error_response)?;
    Ok(StatusCode::NO_CONTENT)
}
