//! Handlers invoked by the external scheduler.

use std::time::Instant;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde_json::json;

use crate::error::AppResult;
use crate::middleware::cron::CronAuth;
use crate::state::AppState;

/// GET /api/v1/cron/keep-alive
///
/// Run a trivial query so the database does not idle out.
pub async fn keep_alive(
    _cron: CronAuth,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let started = Instant::now();
    dailycheck_db::repositories::FormRepo::ping(&state.pool).await?;
    let elapsed_ms = started.elapsed().as_millis();

    tracing::info!(duration_ms = elapsed_ms as u64, "Keep-alive ping completed");

    Ok(Json(json!({
        "success": true,
        "duration": format!("{elapsed_ms}ms"),
        "timestamp": Utc::now().to_rfc3339(),
    })))
}
