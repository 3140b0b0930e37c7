//! OpenAPI documentation aggregator.
//!
//! Collects the `#[utoipa::path]`-annotated handlers and `ToSchema` types
//! into one OpenAPI spec, served via Scalar UI at `/docs`.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Happy Cat API",
        version = "1.0.0",
        description = "A simple API for internet famous cats!",
    ),
    tags(
        (name = "GIFs", description = "Cat GIF catalog: list, random draw, name/tag lookup, and bearer-token-guarded writes"),
    ),
    paths(
        crate::api::gifs::list_gifs,
        crate::api::gifs::random_gif,
        crate::api::gifs::gif_by_name,
        crate::api::gifs::create_gif,
        crate::api::gifs::update_gif,
        crate::api::gifs::delete_gif,
    ),
    components(schemas(
        happycat_core::GifRecord,
        happycat_core::GifCollection,
        happycat_core::NewGif,
        happycat_core::GifPatch,
        crate::api::ErrorResponse,
    ))
)]
pub struct ApiDoc;
