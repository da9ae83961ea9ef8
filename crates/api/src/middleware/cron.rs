//! Shared-secret guard for scheduler-invoked routes.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use dailycheck_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Proof that a request may call a cron route.
///
/// In production the request must carry `Authorization: Bearer <CRON_SECRET>`.
/// A production server without a configured secret rejects every call.
/// Outside production the header is not checked.
///
/// ```ignore
/// async fn my_job(_cron: CronAuth, State(state): State<AppState>) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CronAuth;

impl FromRequestParts<AppState> for CronAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if !state.config.is_production() {
            return Ok(CronAuth);
        }

        let token = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));

        match (token, state.config.cron_secret.as_deref()) {
            (Some(token), Some(secret)) if token == secret => Ok(CronAuth),
            _ => {
                tracing::warn!("Rejected cron request with missing or invalid secret");
                Err(AppError::Core(CoreError::Unauthorized(
                    "Invalid or missing cron secret".into(),
                )))
            }
        }
    }
}
