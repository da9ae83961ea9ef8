//! Form models and DTOs.

use dailycheck_core::field::FormTheme;
use dailycheck_core::types::{DbId, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::field::{CreateField, FormField};

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `forms` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    pub id: DbId,
    pub short_id: String,
    pub name: String,
    pub description: Option<String>,
    #[sqlx(try_from = "String")]
    pub theme: FormTheme,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A form together with its fields in display order.
#[derive(Debug, Clone, Serialize)]
pub struct FormWithFields {
    #[serde(flatten)]
    pub form: Form,
    pub fields: Vec<FormField>,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a form with its initial field list.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateForm {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub theme: FormTheme,
    #[serde(default)]
    #[validate(nested)]
    pub fields: Vec<CreateField>,
}

/// DTO for replacing a form's metadata and, optionally, its whole field set.
///
/// `description` and `theme` keep their stored values when omitted. An
/// explicit `"description": null` clears the description. When `fields` is
/// present the existing fields are deleted and replaced.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateForm {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Outer `None`: key omitted. `Some(None)`: clear.
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    pub theme: Option<FormTheme>,
    #[validate(nested)]
    pub fields: Option<Vec<CreateField>>,
}

/// Deserialize a key that is present in the payload, `null` included, as
/// `Some(_)`. Paired with `#[serde(default)]` so a missing key stays `None`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
