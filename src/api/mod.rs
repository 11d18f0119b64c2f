// HTTP surface: handler namespace and router assembly
use axum::{
    http::{header, HeaderValue},
    routing::{any, get},
    Router,
};
use std::sync::Arc;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

pub mod handlers {
    pub use crate::handlers::*;
}

use handlers::AppState;

/// Builds the application router.
///
/// `/api/vehicle` accepts any method. Every response carries
/// `Access-Control-Allow-Origin: *`.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/api/vehicle", any(handlers::vehicle_lookup))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
}
