//! Validation and encoding of a member's daily submission.
//!
//! Values arrive as arbitrary JSON keyed by field id and are stored as
//! strings. Checkbox values become `"true"`/`"false"`, step counters keep
//! their JSON object text.

use std::collections::{HashMap, HashSet};

use serde_json::Value;

use crate::error::CoreError;
use crate::field::FieldDef;
use crate::types::DbId;

/// Maximum length of a member display name.
pub const MAX_MEMBER_NAME_LENGTH: usize = 100;

/// One encoded value ready to be written as a response value row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedValue {
    pub field_id: DbId,
    pub value: String,
}

/// Check the member name. Names are stored verbatim; only blank names and
/// overlong names are rejected.
pub fn validate_member_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Member name must not be empty".into()));
    }
    if name.chars().count() > MAX_MEMBER_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Member name must be at most {MAX_MEMBER_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Encode a raw JSON value into its stored string form.
pub fn encode_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Validate the submitted values against the form's fields and encode them.
///
/// Every key must be the id of one of `fields`. Required input fields must
/// be present with a non-blank value. The result follows field order.
pub fn prepare_values<F: FieldDef>(
    fields: &[F],
    raw: &serde_json::Map<String, Value>,
) -> Result<Vec<EncodedValue>, CoreError> {
    let known: HashSet<DbId> = fields.iter().map(|f| f.id()).collect();

    let mut by_id: HashMap<DbId, &Value> = HashMap::with_capacity(raw.len());
    for (key, value) in raw {
        match uuid::Uuid::parse_str(key) {
            Ok(id) if known.contains(&id) => {
                by_id.insert(id, value);
            }
            _ => {
                return Err(CoreError::Validation(format!(
                    "Value submitted for unknown field '{key}'"
                )))
            }
        }
    }

    let mut encoded = Vec::with_capacity(by_id.len());
    for field in fields {
        let value = by_id.get(&field.id()).map(|v| encode_value(v));

        let blank = value.as_deref().is_none_or(|v| v.trim().is_empty());
        if field.required() && field.field_type().accepts_input() && blank {
            return Err(CoreError::Validation(format!("{} is required", field.label())));
        }

        if let Some(value) = value {
            encoded.push(EncodedValue {
                field_id: field.id(),
                value,
            });
        }
    }

    Ok(encoded)
}
