use axum::routing::post;
use axum::Router;

use crate::handlers::responses;
use crate::state::AppState;

/// Submission routes mounted at `/responses`.
///
/// ```text
/// POST /  -> submit_response
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(responses::submit_response))
}
