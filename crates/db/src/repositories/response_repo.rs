//! Repository for the `responses` and `response_values` tables.

use std::collections::HashMap;

use dailycheck_core::results::{ResponseEntry, UNKNOWN_MEMBER};
use dailycheck_core::submission::EncodedValue;
use dailycheck_core::types::{CalendarDate, DbId};
use sqlx::PgPool;

use crate::models::response::{Response, ResponseSummaryRow, ResponseValue, ValueRow};

/// Column list for `responses` queries.
const COLUMNS: &str = "id, form_id, member_id, date, created_at, updated_at";

/// Column list for `response_values` queries.
const VALUE_COLUMNS: &str = "id, response_id, field_id, value, created_at";

/// Provides data access for responses and their values.
pub struct ResponseRepo;

impl ResponseRepo {
    /// Find a member's response for one calendar day.
    pub async fn find_for_member_day(
        pool: &PgPool,
        form_id: DbId,
        member_id: DbId,
        date: CalendarDate,
    ) -> Result<Option<Response>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM responses \
             WHERE form_id = $1 AND member_id = $2 AND date = $3"
        );
        sqlx::query_as::<_, Response>(&query)
            .bind(form_id)
            .bind(member_id)
            .bind(date)
            .fetch_optional(pool)
            .await
    }

    /// List the values stored for one response.
    pub async fn list_values(
        pool: &PgPool,
        response_id: DbId,
    ) -> Result<Vec<ResponseValue>, sqlx::Error> {
        let query = format!(
            "SELECT {VALUE_COLUMNS} FROM response_values WHERE response_id = $1 ORDER BY created_at"
        );
        sqlx::query_as::<_, ResponseValue>(&query)
            .bind(response_id)
            .fetch_all(pool)
            .await
    }

    /// Load a form's responses with member names and values, newest date
    /// first and newest submission first within a date.
    ///
    /// `date` restricts the result to one calendar day.
    pub async fn list_entries(
        pool: &PgPool,
        form_id: DbId,
        date: Option<CalendarDate>,
    ) -> Result<Vec<ResponseEntry>, sqlx::Error> {
        let rows = sqlx::query_as::<_, ResponseSummaryRow>(
            "SELECT r.id, r.date, r.created_at, m.name AS member_name \
             FROM responses r \
             LEFT JOIN members m ON m.id = r.member_id \
             WHERE r.form_id = $1 AND ($2::date IS NULL OR r.date = $2) \
             ORDER BY r.date DESC, r.created_at DESC",
        )
        .bind(form_id)
        .bind(date)
        .fetch_all(pool)
        .await?;

        let values = sqlx::query_as::<_, ValueRow>(
            "SELECT rv.response_id, rv.field_id, rv.value \
             FROM response_values rv \
             JOIN responses r ON r.id = rv.response_id \
             WHERE r.form_id = $1 AND ($2::date IS NULL OR r.date = $2)",
        )
        .bind(form_id)
        .bind(date)
        .fetch_all(pool)
        .await?;

        let mut entries: Vec<ResponseEntry> = rows
            .into_iter()
            .map(|row| ResponseEntry {
                id: row.id,
                date: row.date,
                created_at: row.created_at,
                member_name: row.member_name.unwrap_or_else(|| UNKNOWN_MEMBER.to_string()),
                values: Default::default(),
            })
            .collect();

        let index: HashMap<DbId, usize> =
            entries.iter().enumerate().map(|(i, e)| (e.id, i)).collect();
        for v in values {
            if let Some(&i) = index.get(&v.response_id) {
                entries[i].values.insert(v.field_id, v.value);
            }
        }

        Ok(entries)
    }

    /// Return the member's response row for `date`, creating it if needed.
    ///
    /// The second element is `true` when the row was inserted by this call.
    pub(crate) async fn upsert_for_day(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        form_id: DbId,
        member_id: DbId,
        date: CalendarDate,
    ) -> Result<(Response, bool), sqlx::Error> {
        let query = format!(
            "INSERT INTO responses (form_id, member_id, date) VALUES ($1, $2, $3) \
             ON CONFLICT ON CONSTRAINT uq_responses_form_member_date \
             DO UPDATE SET updated_at = NOW() \
             RETURNING {COLUMNS}, (xmax = 0) AS inserted"
        );
        let (response, inserted) = sqlx::query_as::<_, ResponseWithFlag>(&query)
            .bind(form_id)
            .bind(member_id)
            .bind(date)
            .fetch_one(&mut **tx)
            .await
            .map(|row| (row.response, row.inserted))?;
        Ok((response, inserted))
    }

    /// Replace all values of a response.
    pub(crate) async fn replace_values(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        response_id: DbId,
        values: &[EncodedValue],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM response_values WHERE response_id = $1")
            .bind(response_id)
            .execute(&mut **tx)
            .await?;

        if values.is_empty() {
            return Ok(());
        }

        let field_ids: Vec<DbId> = values.iter().map(|v| v.field_id).collect();
        let texts: Vec<&str> = values.iter().map(|v| v.value.as_str()).collect();
        sqlx::query(
            "INSERT INTO response_values (response_id, field_id, value) \
             SELECT $1, f, v FROM UNNEST($2::uuid[], $3::text[]) AS t(f, v)",
        )
        .bind(response_id)
        .bind(&field_ids)
        .bind(&texts)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }
}

/// `responses` row plus the insert/update marker from an upsert.
#[derive(sqlx::FromRow)]
struct ResponseWithFlag {
    #[sqlx(flatten)]
    response: Response,
    inserted: bool,
}
