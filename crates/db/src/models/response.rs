//! Response and response value models, plus the submission DTO.

use dailycheck_core::types::{CalendarDate, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `responses` table. Unique per `(form_id, member_id, date)`.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub id: DbId,
    pub form_id: DbId,
    pub member_id: DbId,
    pub date: CalendarDate,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `response_values` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseValue {
    pub id: DbId,
    pub response_id: DbId,
    pub field_id: DbId,
    pub value: String,
    pub created_at: Timestamp,
}

/// A response joined with its member's name, as read for result views.
#[derive(Debug, Clone, FromRow)]
pub struct ResponseSummaryRow {
    pub id: DbId,
    pub date: CalendarDate,
    pub created_at: Timestamp,
    pub member_name: Option<String>,
}

/// A single value as read for result views.
#[derive(Debug, Clone, FromRow)]
pub struct ValueRow {
    pub response_id: DbId,
    pub field_id: DbId,
    pub value: String,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// DTO for `POST /responses`.
///
/// `form_id` is a form reference: either the form's UUID or its short alias.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub form_id: String,
    pub member_name: String,
    #[serde(default)]
    pub values: serde_json::Map<String, serde_json::Value>,
}

/// Result of a daily submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionOutcome {
    pub response_id: DbId,
    pub member_id: DbId,
    pub date: CalendarDate,
    /// `false` when an existing response for the day was overwritten.
    pub created: bool,
}
