//! Handler for daily submissions.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use dailycheck_core::submission::{prepare_values, validate_member_name};
use dailycheck_core::types::{today, CalendarDate, DbId};
use dailycheck_db::models::response::SubmitResponse;
use dailycheck_db::repositories::SubmissionRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::load_form;
use crate::state::AppState;

/// Body returned after a successful submission.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResult {
    pub success: bool,
    pub response_id: DbId,
    pub date: CalendarDate,
    /// `false` when today's earlier submission was overwritten.
    pub created: bool,
}

/// POST /api/v1/responses
///
/// Store the member's values as today's response to the form, replacing any
/// earlier submission from the same member today.
pub async fn submit_response(
    State(state): State<AppState>,
    Json(input): Json<SubmitResponse>,
) -> AppResult<impl IntoResponse> {
    let loaded = load_form(&state, &input.form_id).await?;

    validate_member_name(&input.member_name)?;
    let values = prepare_values(&loaded.fields, &input.values)?;

    let date = today();
    let outcome = SubmissionRepo::submit(
        &state.pool,
        loaded.form.id,
        &input.member_name,
        date,
        &values,
    )
    .await?;

    tracing::info!(
        form_id = %loaded.form.id,
        response_id = %outcome.response_id,
        member = %input.member_name,
        %date,
        created = outcome.created,
        value_count = values.len(),
        "Response submitted",
    );

    Ok(Json(SubmitResult {
        success: true,
        response_id: outcome.response_id,
        date: outcome.date,
        created: outcome.created,
    }))
}
