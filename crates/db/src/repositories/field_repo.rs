//! Repository for the `form_fields` table.

use dailycheck_core::types::DbId;
use sqlx::PgPool;

use crate::models::field::{CreateField, FormField};

/// Column list for `form_fields` queries.
const COLUMNS: &str = "\
    id, form_id, label, field_type, options, field_order, required, created_at";

/// Provides data access for form fields.
pub struct FieldRepo;

impl FieldRepo {
    /// List a form's fields in display order.
    pub async fn list_by_form(pool: &PgPool, form_id: DbId) -> Result<Vec<FormField>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM form_fields WHERE form_id = $1 ORDER BY field_order, created_at"
        );
        sqlx::query_as::<_, FormField>(&query)
            .bind(form_id)
            .fetch_all(pool)
            .await
    }

    /// Insert `fields` for a form, numbering them by list position.
    pub(crate) async fn insert_all(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        form_id: DbId,
        fields: &[CreateField],
    ) -> Result<Vec<FormField>, sqlx::Error> {
        let query = format!(
            "INSERT INTO form_fields (form_id, label, field_type, options, field_order, required) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );

        let mut inserted = Vec::with_capacity(fields.len());
        for (index, field) in fields.iter().enumerate() {
            let row = sqlx::query_as::<_, FormField>(&query)
                .bind(form_id)
                .bind(&field.label)
                .bind(field.field_type.as_str())
                .bind(&field.options)
                .bind(index as i32)
                .bind(field.required.unwrap_or(true))
                .fetch_one(&mut **tx)
                .await?;
            inserted.push(row);
        }
        Ok(inserted)
    }

    /// Replace a form's whole field set within the caller's transaction.
    pub(crate) async fn replace_all(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        form_id: DbId,
        fields: &[CreateField],
    ) -> Result<Vec<FormField>, sqlx::Error> {
        sqlx::query("DELETE FROM form_fields WHERE form_id = $1")
            .bind(form_id)
            .execute(&mut **tx)
            .await?;

        Self::insert_all(tx, form_id, fields).await
    }
}
