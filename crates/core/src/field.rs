//! Field and theme vocabularies shared by the store, the submission path
//! and the result views.
//!
//! Both enums are persisted as lowercase text and constrained by `CHECK`
//! clauses in the migrations; the string forms here must match them.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Field types
// ---------------------------------------------------------------------------

/// Input kind of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Number,
    Text,
    Select,
    /// Ordered named counters; the value is a JSON object `step -> count`.
    Steps,
    Checkbox,
    /// Display-only image; the first option holds the image URL.
    Image,
}

/// All valid field type strings.
const VALID_FIELD_TYPES: &[&str] = &["number", "text", "select", "steps", "checkbox", "image"];

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Text => "text",
            Self::Select => "select",
            Self::Steps => "steps",
            Self::Checkbox => "checkbox",
            Self::Image => "image",
        }
    }

    /// Parse a field type from its stored string form.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "number" => Ok(Self::Number),
            "text" => Ok(Self::Text),
            "select" => Ok(Self::Select),
            "steps" => Ok(Self::Steps),
            "checkbox" => Ok(Self::Checkbox),
            "image" => Ok(Self::Image),
            _ => Err(CoreError::Validation(format!(
                "Invalid field type '{s}'. Must be one of: {}",
                VALID_FIELD_TYPES.join(", ")
            ))),
        }
    }

    /// Whether the field takes input from the member. Image fields are
    /// display-only.
    pub fn accepts_input(&self) -> bool {
        !matches!(self, Self::Image)
    }

    /// Whether the field's options list must be non-empty.
    pub fn requires_options(&self) -> bool {
        matches!(self, Self::Select | Self::Steps)
    }
}

impl TryFrom<String> for FieldType {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}

// ---------------------------------------------------------------------------
// Themes
// ---------------------------------------------------------------------------

/// Presentation theme of a form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormTheme {
    #[default]
    Default,
    Navy,
}

impl FormTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Navy => "navy",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "default" => Ok(Self::Default),
            "navy" => Ok(Self::Navy),
            _ => Err(CoreError::Validation(format!(
                "Invalid theme '{s}'. Must be one of: default, navy"
            ))),
        }
    }
}

impl TryFrom<String> for FormTheme {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}

// ---------------------------------------------------------------------------
// Field definitions
// ---------------------------------------------------------------------------

/// Read access to a field definition.
///
/// Implemented by the persisted field row so the pure functions in this
/// crate can work on it without depending on the database layer.
pub trait FieldDef {
    fn id(&self) -> DbId;
    fn label(&self) -> &str;
    fn field_type(&self) -> FieldType;
    /// Configured options in order; empty when the field has none.
    fn options(&self) -> &[String];
    fn required(&self) -> bool;
}

/// Validate one field definition before it is stored.
pub fn validate_field_input(
    label: &str,
    field_type: FieldType,
    options: Option<&[String]>,
) -> Result<(), CoreError> {
    if label.trim().is_empty() {
        return Err(CoreError::Validation("Field label must not be empty".into()));
    }
    if field_type.requires_options() && options.is_none_or(|o| o.is_empty()) {
        return Err(CoreError::Validation(format!(
            "Field '{label}' of type {} needs at least one option",
            field_type.as_str()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn field_type_round_trips_through_strings() {
        for s in VALID_FIELD_TYPES {
            assert_eq!(FieldType::from_str(s).unwrap().as_str(), *s);
        }
    }

    #[test]
    fn unknown_field_type_is_rejected() {
        assert_matches!(FieldType::from_str("date"), Err(CoreError::Validation(_)));
        assert_matches!(FieldType::from_str("Number"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn field_type_serde_is_lowercase() {
        let json = serde_json::to_string(&FieldType::Checkbox).unwrap();
        assert_eq!(json, "\"checkbox\"");
        let parsed: FieldType = serde_json::from_str("\"steps\"").unwrap();
        assert_eq!(parsed, FieldType::Steps);
    }

    #[test]
    fn image_fields_take_no_input() {
        assert!(!FieldType::Image.accepts_input());
        assert!(FieldType::Checkbox.accepts_input());
    }

    #[test]
    fn theme_defaults_to_default() {
        assert_eq!(FormTheme::default(), FormTheme::Default);
        assert_eq!(FormTheme::try_from("navy".to_string()).unwrap(), FormTheme::Navy);
        assert!(FormTheme::from_str("pink").is_err());
    }

    #[test]
    fn blank_label_is_rejected() {
        assert_matches!(
            validate_field_input("  ", FieldType::Text, None),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn select_and_steps_need_options() {
        assert!(validate_field_input("Mood", FieldType::Select, None).is_err());
        assert!(validate_field_input("Steps", FieldType::Steps, Some(&[])).is_err());
        let opts = vec!["A".to_string()];
        assert!(validate_field_input("Steps", FieldType::Steps, Some(&opts)).is_ok());
        assert!(validate_field_input("Count", FieldType::Number, None).is_ok());
    }
}
