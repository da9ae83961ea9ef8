//! Display formatting for result tables and entry-form defaults.

use serde_json::{Map, Value};

use crate::field::{FieldDef, FieldType};

/// Shown for empty cells and non-numeric totals.
pub const EMPTY_PLACEHOLDER: &str = "-";

/// Shown for a checked checkbox.
pub const CHECK_MARK: &str = "✓";

/// Format a stored value for display in a result table.
///
/// Steps values render as their counts joined with `-` in configured step
/// order (`{"A":1,"B":0}` with steps `[A, B]` gives `1-0`). Valid JSON that
/// is not an object counts every step as 0. Malformed JSON and `null` are
/// shown as-is.
pub fn format_value<F: FieldDef>(field: &F, value: &str) -> String {
    if value.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }

    match field.field_type() {
        FieldType::Checkbox => {
            if value == "true" {
                CHECK_MARK.to_string()
            } else {
                EMPTY_PLACEHOLDER.to_string()
            }
        }
        FieldType::Steps => match serde_json::from_str::<Value>(value) {
            Ok(Value::Object(counts)) => join_steps(field, |step| counts.get(step)),
            // Scalars and arrays carry no step counts.
            Ok(Value::Bool(_) | Value::Number(_) | Value::String(_) | Value::Array(_)) => {
                join_steps(field, |_| None)
            }
            Ok(Value::Null) | Err(_) => value.to_string(),
        },
        _ => value.to_string(),
    }
}

fn join_steps<'a, F, G>(field: &F, mut count_of: G) -> String
where
    F: FieldDef,
    G: FnMut(&str) -> Option<&'a Value>,
{
    field
        .options()
        .iter()
        .map(|step| step_count(count_of(step)))
        .collect::<Vec<_>>()
        .join("-")
}

fn step_count(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "0".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Column header for a field: steps fields list their step names.
pub fn field_header<F: FieldDef>(field: &F) -> String {
    if field.field_type() == FieldType::Steps && !field.options().is_empty() {
        format!("{} ({})", field.label(), field.options().join("-"))
    } else {
        field.label().to_string()
    }
}

/// Whether a field gets a column in result tables.
pub fn is_display_field<F: FieldDef>(field: &F) -> bool {
    field.field_type() != FieldType::Image
}

/// Pre-filled value for a field on a fresh entry form.
pub fn initial_value<F: FieldDef>(field: &F) -> String {
    match field.field_type() {
        FieldType::Number => "0".to_string(),
        FieldType::Steps => {
            let counts: Map<String, Value> = field
                .options()
                .iter()
                .map(|step| (step.clone(), Value::from(0)))
                .collect();
            Value::Object(counts).to_string()
        }
        FieldType::Checkbox => "false".to_string(),
        FieldType::Text | FieldType::Select | FieldType::Image => String::new(),
    }
}

/// Format a numeric total the way the result table shows it.
pub fn format_total(sum: f64) -> String {
    sum.to_string()
}
