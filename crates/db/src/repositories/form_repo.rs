//! Repository for the `forms` table.
//!
//! Creates and updates write the form row and its fields in one
//! transaction. Deletes cascade to fields, members, responses and values.

use dailycheck_core::form_ref::FormRef;
use dailycheck_core::short_id::generate_short_id;
use dailycheck_core::types::DbId;
use sqlx::PgPool;

use crate::models::form::{CreateForm, Form, FormWithFields, UpdateForm};
use crate::repositories::FieldRepo;

/// Column list for `forms` queries.
const COLUMNS: &str = "\
    id, short_id, name, description, theme, created_at, updated_at";

/// Provides data access for forms.
pub struct FormRepo;

impl FormRepo {
    /// List all forms, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Form>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM forms ORDER BY created_at DESC");
        sqlx::query_as::<_, Form>(&query).fetch_all(pool).await
    }

    /// Find a form by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Form>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM forms WHERE id = $1");
        sqlx::query_as::<_, Form>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a form by its short alias.
    pub async fn find_by_short_id(
        pool: &PgPool,
        short_id: &str,
    ) -> Result<Option<Form>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM forms WHERE short_id = $1");
        sqlx::query_as::<_, Form>(&query)
            .bind(short_id)
            .fetch_optional(pool)
            .await
    }

    /// Resolve a form reference (id or alias) to a form.
    pub async fn resolve(pool: &PgPool, form_ref: &FormRef) -> Result<Option<Form>, sqlx::Error> {
        match form_ref {
            FormRef::Id(id) => Self::find_by_id(pool, *id).await,
            FormRef::Alias(alias) => Self::find_by_short_id(pool, alias).await,
        }
    }

    /// Resolve a form reference and load its fields.
    pub async fn resolve_with_fields(
        pool: &PgPool,
        form_ref: &FormRef,
    ) -> Result<Option<FormWithFields>, sqlx::Error> {
        let Some(form) = Self::resolve(pool, form_ref).await? else {
            return Ok(None);
        };
        let fields = FieldRepo::list_by_form(pool, form.id).await?;
        Ok(Some(FormWithFields { form, fields }))
    }

    /// Create a form and its fields with a freshly generated short alias.
    ///
    /// Returns `None` when `max_attempts` aliases in a row were already
    /// taken; nothing is written in that case.
    pub async fn create(
        pool: &PgPool,
        dto: &CreateForm,
        max_attempts: u32,
    ) -> Result<Option<FormWithFields>, sqlx::Error> {
        Self::create_with_aliases(pool, dto, max_attempts, generate_short_id).await
    }

    /// Like [`FormRepo::create`], drawing candidate aliases from `next_alias`.
    pub async fn create_with_aliases<G>(
        pool: &PgPool,
        dto: &CreateForm,
        max_attempts: u32,
        mut next_alias: G,
    ) -> Result<Option<FormWithFields>, sqlx::Error>
    where
        G: FnMut() -> String,
    {
        let query = format!(
            "INSERT INTO forms (short_id, name, description, theme) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (short_id) DO NOTHING \
             RETURNING {COLUMNS}"
        );

        let mut tx = pool.begin().await?;

        for attempt in 1..=max_attempts {
            let alias = next_alias();
            let inserted = sqlx::query_as::<_, Form>(&query)
                .bind(&alias)
                .bind(&dto.name)
                .bind(&dto.description)
                .bind(dto.theme.as_str())
                .fetch_optional(&mut *tx)
                .await?;

            match inserted {
                Some(form) => {
                    let fields = FieldRepo::insert_all(&mut tx, form.id, &dto.fields).await?;
                    tx.commit().await?;
                    return Ok(Some(FormWithFields { form, fields }));
                }
                None => {
                    tracing::debug!(attempt, alias = %alias, "Short alias already taken");
                }
            }
        }

        tx.rollback().await?;
        Ok(None)
    }

    /// Replace a form's metadata and, when `dto.fields` is present, its whole
    /// field set.
    ///
    /// Returns `None` if the form does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateForm,
    ) -> Result<Option<FormWithFields>, sqlx::Error> {
        // An omitted description keeps the stored one; an explicit null clears it.
        let description_provided = dto.description.is_some();
        let description = dto.description.as_ref().and_then(|d| d.as_deref());

        let query = format!(
            "UPDATE forms SET \
                 name = $2, \
                 description = CASE WHEN $3 THEN $4 ELSE description END, \
                 theme = COALESCE($5, theme) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );

        let mut tx = pool.begin().await?;

        let Some(form) = sqlx::query_as::<_, Form>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(description_provided)
            .bind(description)
            .bind(dto.theme.map(|t| t.as_str()))
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let replaced = match &dto.fields {
            Some(fields) => Some(FieldRepo::replace_all(&mut tx, id, fields).await?),
            None => None,
        };

        tx.commit().await?;

        let fields = match replaced {
            Some(fields) => fields,
            None => FieldRepo::list_by_form(pool, id).await?,
        };
        Ok(Some(FormWithFields { form, fields }))
    }

    /// Delete a form and everything that hangs off it.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM forms WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Cheapest query that touches the `forms` table, used to keep the
    /// database warm.
    pub async fn ping(pool: &PgPool) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM forms LIMIT 1")
            .fetch_optional(pool)
            .await
    }
}
