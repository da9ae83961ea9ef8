//! Handlers for form management and the entry view.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use dailycheck_core::error::CoreError;
use dailycheck_core::field::validate_field_input;
use dailycheck_core::presentation::initial_value;
use dailycheck_core::types::DbId;
use dailycheck_db::models::field::{CreateField, FormField};
use dailycheck_db::models::form::{CreateForm, Form, UpdateForm};
use dailycheck_db::repositories::FormRepo;
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::load_form;
use crate::state::AppState;

/// A field on the entry form with its pre-filled value.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryField {
    #[serde(flatten)]
    pub field: FormField,
    pub initial_value: String,
}

/// Everything a client needs to render a fresh entry form.
#[derive(Debug, Serialize)]
pub struct EntryView {
    pub form: Form,
    pub fields: Vec<EntryField>,
}

/// Reject blank names and malformed field definitions.
fn validate_definition(name: &str, fields: &[CreateField]) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Form name must not be empty".into()));
    }
    for field in fields {
        validate_field_input(&field.label, field.field_type, field.options.as_deref())?;
    }
    Ok(())
}

/// GET /api/v1/forms
///
/// List all forms, newest first.
pub async fn list_forms(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let forms = FormRepo::list(&state.pool).await?;
    Ok(Json(forms))
}

/// POST /api/v1/forms
///
/// Create a form with its fields and a fresh short alias.
pub async fn create_form(
    State(state): State<AppState>,
    Json(input): Json<CreateForm>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    validate_definition(&input.name, &input.fields)?;

    let attempts = state.config.short_id_max_attempts;
    let created = FormRepo::create(&state.pool, &input, attempts)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(format!(
                "Could not allocate a unique short alias after {attempts} attempts"
            )))
        })?;

    tracing::info!(
        form_id = %created.form.id,
        short_id = %created.form.short_id,
        field_count = created.fields.len(),
        "Form created",
    );

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/forms/{id_or_alias}
///
/// Retrieve a form and its ordered fields by id or short alias.
pub async fn get_form(
    State(state): State<AppState>,
    Path(form_ref): Path<String>,
) -> AppResult<impl IntoResponse> {
    let form = load_form(&state, &form_ref).await?;
    Ok(Json(form))
}

/// PUT /api/v1/forms/{id}
///
/// Replace a form's metadata and, when `fields` is given, its whole field set.
pub async fn update_form(
    State(state): State<AppState>,
    Path(form_id): Path<DbId>,
    Json(input): Json<UpdateForm>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    validate_definition(&input.name, input.fields.as_deref().unwrap_or_default())?;

    let updated = FormRepo::update(&state.pool, form_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Form",
            key: form_id.to_string(),
        }))?;

    tracing::info!(
        form_id = %form_id,
        fields_replaced = input.fields.is_some(),
        "Form updated",
    );

    Ok(Json(updated))
}

/// DELETE /api/v1/forms/{id}
///
/// Delete a form together with its fields, members and responses.
pub async fn delete_form(
    State(state): State<AppState>,
    Path(form_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = FormRepo::delete(&state.pool, form_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Form",
            key: form_id.to_string(),
        }));
    }

    tracing::info!(form_id = %form_id, "Form deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/forms/{id_or_alias}/entry
///
/// The form with each field's pre-filled value for a fresh entry.
pub async fn get_entry(
    State(state): State<AppState>,
    Path(form_ref): Path<String>,
) -> AppResult<impl IntoResponse> {
    let loaded = load_form(&state, &form_ref).await?;

    let fields = loaded
        .fields
        .into_iter()
        .map(|field| EntryField {
            initial_value: initial_value(&field),
            field,
        })
        .collect();

    Ok(Json(EntryView {
        form: loaded.form,
        fields,
    }))
}
