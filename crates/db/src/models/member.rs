//! Member model.

use dailycheck_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `members` table. Unique per `(form_id, name)`.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: DbId,
    pub form_id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}
