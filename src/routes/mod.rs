//! Route tables and the assembled application router.

mod common;
mod horse;

pub use common::{common_routes, common_routes_with_ready};
pub use horse::horse_routes;

use crate::state::AppState;
use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Request body cap for JSON payloads.
pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Common and horse routes with body limit and request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(horse_routes(state))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
}

/// Allow the frontend origin with credentials; any method and header, mirrored from the preflight request.
pub fn cors_layer(origin: &str) -> Result<CorsLayer, crate::error::ConfigError> {
    let origin: HeaderValue = origin.parse().map_err(|_| crate::error::ConfigError::Invalid {
        var: "CORS_ORIGIN",
        reason: format!("not a valid header value: {}", origin),
    })?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}
