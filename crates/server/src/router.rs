//! HTTP router construction.
//!
//! Assembles the read routes, the bearer-guarded write routes, the accept
//! negotiation layer, and the OpenAPI docs into a single `Router`.

use std::sync::Arc;

use axum::handler::Handler;
use axum::middleware;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::state::AppState;
use crate::{accept, api, auth};

/// Build the complete application router with all routes and middleware.
///
/// The bearer check wraps each write handler individually, so reads stay
/// open and a request with the wrong method still gets its 405 instead of a
/// 403.
pub fn build_router(state: Arc<AppState>) -> Router {
    let admin = middleware::from_fn_with_state(state.clone(), auth::require_admin);

    // Static /gifs/random is registered alongside the {name} capture; the
    // router prefers the static segment, so a write aimed at "random" gets
    // that route's method-router 405 before auth or id validation run. The
    // validator reserves the literal token as well, covering any caller
    // that reaches the service without this router in front.
    let gifs = Router::new()
        .route(
            "/gifs",
            get(api::list_gifs).post(api::create_gif.layer(admin.clone())),
        )
        .route("/gifs/random", get(api::random_gif))
        .route(
            "/gifs/{name}",
            get(api::gif_by_name)
                .put(api::update_gif.layer(admin.clone()))
                .delete(api::delete_gif.layer(admin)),
        )
        .layer(middleware::from_fn(accept::require_json_accept));

    gifs
        // The welcome route negotiates text/plain itself, so it sits outside
        // the JSON accept layer.
        .route("/", get(api::welcome))
        .layer(CorsLayer::permissive())
        .with_state(state)
        .merge(Scalar::with_url("/docs", api::doc::ApiDoc::openapi()))
}
