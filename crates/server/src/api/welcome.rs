use axum::http::{HeaderMap, StatusCode};
use axum::Json;

use crate::accept;

use super::ErrorResponse;

pub const WELCOME: &str = "^>\u{2a4a}<^ Welcome to the Happy Cat API ^>\u{2a4a}<^

    This API delivers GIFs of world-renowned cats, here to brighten your day.

    Available endpoints:
    GET /gifs           - Retrieve a list of all cat GIF memes
    GET /gifs?tag=<t>   - Retrieve all cat GIF memes carrying a tag
    GET /gifs/random    - Retrieve one cat GIF meme at random
    GET /gifs/{name}    - Retrieve details of a specific cat GIF meme
    ";

/// Plain-text welcome banner. Unlike the rest of the API this route answers
/// in text/plain, so it negotiates its own Accept header.
pub async fn welcome(headers: HeaderMap) -> Result<&'static str, (StatusCode, Json<ErrorResponse>)> {
    if !accept::accepts(&headers, "text", "plain") {
        return Err((
            StatusCode::NOT_ACCEPTABLE,
            Json(ErrorResponse {
                error: "this endpoint only serves text/plain".to_string(),
            }),
        ));
    }
    Ok(WELCOME)
}
