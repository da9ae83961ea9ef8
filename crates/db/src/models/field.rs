//! Form field models and DTOs.

use dailycheck_core::field::{FieldDef, FieldType};
use dailycheck_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `form_fields` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub id: DbId,
    pub form_id: DbId,
    pub label: String,
    #[sqlx(try_from = "String")]
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub options: Option<Vec<String>>,
    pub field_order: i32,
    pub required: bool,
    pub created_at: Timestamp,
}

impl FieldDef for FormField {
    fn id(&self) -> DbId {
        self.id
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn field_type(&self) -> FieldType {
        self.field_type
    }

    fn options(&self) -> &[String] {
        self.options.as_deref().unwrap_or_default()
    }

    fn required(&self) -> bool {
        self.required
    }
}

/// DTO for one field of a create/update form payload. The field's position
/// in the payload list becomes its `field_order`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateField {
    #[validate(length(min = 1, max = 200))]
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub options: Option<Vec<String>>,
    /// Defaults to `true`.
    pub required: Option<bool>,
}
