//! Repository for the `members` table.

use dailycheck_core::types::DbId;
use sqlx::PgPool;

use crate::models::member::Member;

/// Column list for `members` queries.
const COLUMNS: &str = "id, form_id, name, created_at";

/// Provides data access for members.
pub struct MemberRepo;

impl MemberRepo {
    /// Find a member by exact name within a form.
    pub async fn find_by_name(
        pool: &PgPool,
        form_id: DbId,
        name: &str,
    ) -> Result<Option<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM members WHERE form_id = $1 AND name = $2");
        sqlx::query_as::<_, Member>(&query)
            .bind(form_id)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List a form's members by name.
    pub async fn list_by_form(pool: &PgPool, form_id: DbId) -> Result<Vec<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM members WHERE form_id = $1 ORDER BY name");
        sqlx::query_as::<_, Member>(&query)
            .bind(form_id)
            .fetch_all(pool)
            .await
    }

    /// Return the member named `name` in the form, creating it if needed.
    ///
    /// Uses `ON CONFLICT ... DO UPDATE` so concurrent callers converge on the
    /// same row and `RETURNING` always yields it.
    pub(crate) async fn upsert(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        form_id: DbId,
        name: &str,
    ) -> Result<Member, sqlx::Error> {
        let query = format!(
            "INSERT INTO members (form_id, name) VALUES ($1, $2) \
             ON CONFLICT ON CONSTRAINT uq_members_form_id_name \
             DO UPDATE SET name = EXCLUDED.name \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(form_id)
            .bind(name)
            .fetch_one(&mut **tx)
            .await
    }
}
