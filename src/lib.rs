use axum::{
    Json, Router,
    http::{HeaderName, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tower::{Layer, ServiceBuilder};
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

use crate::handler::{AppState, not_found};

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod handler;
pub mod model;
pub mod validation;

pub const API_PREFIX: &str = "/api/v1";

pub fn success<T: Serialize>(body: T) -> Response {
    (StatusCode::OK, Json(body)).into_response()
}

pub fn created<T: Serialize>(body: T) -> Response {
    (StatusCode::CREATED, Json(body)).into_response()
}

pub fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([
            header::ORIGIN,
            HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
}

/// The served application. Trailing slashes are trimmed before routing.
pub type CatalogService = NormalizePath<Router>;

/// Full application router: the catalog API under [`API_PREFIX`], a JSON 404
/// for everything else, CORS and request tracing.
pub fn build_router(state: AppState) -> CatalogService {
    let router = Router::new()
        .nest(API_PREFIX, catalog::routes())
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors()),
        )
        .with_state(state);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
