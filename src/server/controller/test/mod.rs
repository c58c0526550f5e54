use axum::{
    body::Body,
    http::{Request, Response},
};
use tower::ServiceExt;

use crate::server::{router::router, state::AppState};

mod callback;

/// Sends a GET for `uri` through the application router.
async fn get(state: &AppState, uri: &str) -> Response<Body> {
    router()
        .with_state(state.clone())
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Reads a response body as UTF-8 text.
async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
