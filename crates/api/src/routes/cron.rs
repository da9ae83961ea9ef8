use axum::routing::get;
use axum::Router;

use crate::handlers::cron;
use crate::state::AppState;

/// Scheduler routes mounted at `/cron`. Guarded by [`CronAuth`].
///
/// ```text
/// GET /keep-alive  -> keep_alive
/// ```
///
/// [`CronAuth`]: crate::middleware::cron::CronAuth
pub fn router() -> Router<AppState> {
    Router::new().route("/keep-alive", get(cron::keep_alive))
}
