//! Handlers for the results views.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use dailycheck_core::field::{FieldDef, FieldType};
use dailycheck_core::presentation::{
    field_header, format_total, format_value, is_display_field, EMPTY_PLACEHOLDER,
};
use dailycheck_core::results::{
    dates_newest_first, field_sum, group_by_date, select_date, summarize, DateGroups,
    DateSummary, ResponseEntry,
};
use dailycheck_core::types::{today, CalendarDate, DbId};
use dailycheck_db::models::field::FormField;
use dailycheck_db::repositories::ResponseRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::load_form;
use crate::query::DateParams;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct FormHeader {
    pub id: DbId,
    pub name: String,
}

/// Full results payload for a form.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsView {
    pub form: FormHeader,
    pub fields: Vec<FormField>,
    pub responses: Vec<ResponseEntry>,
    pub grouped_by_date: DateGroups,
    pub dates: Vec<CalendarDate>,
    pub summary: Option<DateSummary>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub member_name: String,
    pub cells: Vec<String>,
}

/// One date group rendered as display strings.
#[derive(Debug, Serialize)]
pub struct ResultsTable {
    pub date: Option<CalendarDate>,
    pub headers: Vec<String>,
    pub rows: Vec<TableRow>,
    pub totals: Vec<String>,
}

/// GET /api/v1/forms/{id_or_alias}/responses?date=YYYY-MM-DD
///
/// All responses of a form grouped by date, with numeric sums for the
/// selected date group.
pub async fn get_results(
    State(state): State<AppState>,
    Path(form_ref): Path<String>,
    Query(params): Query<DateParams>,
) -> AppResult<impl IntoResponse> {
    let requested = params.date()?;
    let loaded = load_form(&state, &form_ref).await?;

    let responses = ResponseRepo::list_entries(&state.pool, loaded.form.id, requested).await?;
    let grouped_by_date = group_by_date(&responses);
    let selected = select_date(&grouped_by_date, requested, today());
    let summary = summarize(&loaded.fields, &grouped_by_date, selected);

    tracing::debug!(
        form_id = %loaded.form.id,
        response_count = responses.len(),
        selected_date = ?selected,
        "Results loaded",
    );

    Ok(Json(ResultsView {
        form: FormHeader {
            id: loaded.form.id,
            name: loaded.form.name,
        },
        fields: loaded.fields,
        dates: dates_newest_first(&grouped_by_date),
        responses,
        grouped_by_date,
        summary,
    }))
}

/// GET /api/v1/forms/{id_or_alias}/results/table?date=YYYY-MM-DD
///
/// The selected date group formatted for display. Image fields are left out.
pub async fn get_results_table(
    State(state): State<AppState>,
    Path(form_ref): Path<String>,
    Query(params): Query<DateParams>,
) -> AppResult<impl IntoResponse> {
    let requested = params.date()?;
    let loaded = load_form(&state, &form_ref).await?;

    let responses = ResponseRepo::list_entries(&state.pool, loaded.form.id, requested).await?;
    let groups = group_by_date(&responses);
    let date = select_date(&groups, requested, today());
    let entries = date
        .and_then(|d| groups.get(&d))
        .map(Vec::as_slice)
        .unwrap_or_default();

    let columns: Vec<&FormField> = loaded
        .fields
        .iter()
        .filter(|f| is_display_field(*f))
        .collect();

    Ok(Json(build_table(date, &columns, entries)))
}

fn build_table(
    date: Option<CalendarDate>,
    columns: &[&FormField],
    entries: &[ResponseEntry],
) -> ResultsTable {
    let headers = columns.iter().map(|f| field_header(*f)).collect();

    let rows = entries
        .iter()
        .map(|entry| TableRow {
            member_name: entry.member_name.clone(),
            cells: columns
                .iter()
                .map(|f| {
                    let raw = entry.values.get(&f.id).map(String::as_str).unwrap_or("");
                    format_value(*f, raw)
                })
                .collect(),
        })
        .collect();

    let totals = columns
        .iter()
        .map(|f| match f.field_type() {
            FieldType::Number => format_total(field_sum(f.id(), entries)),
            _ => EMPTY_PLACEHOLDER.to_string(),
        })
        .collect();

    ResultsTable {
        date,
        headers,
        rows,
        totals,
    }
}
