use axum::Router;
use axum::http::{HeaderValue, header};
use axum::routing::{any, get};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use super::AppState;
use super::handlers;

/// Build the router. The lookup route answers any method.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(handlers::nearby_providers))
        .route("/health", get(handlers::health))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
