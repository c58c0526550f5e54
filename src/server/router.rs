use axum::{body::Body, http::Request, routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing::Span;

use crate::server::{controller::auth::callback, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/callback", get(callback))
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
}

/// Request span carrying the method and path only.
///
/// The query string holds the single-use authorization code, so it stays out of the logs.
fn request_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
    )
}
