//! Daily submission: member upsert, response upsert and value replacement
//! in a single transaction.

use dailycheck_core::submission::EncodedValue;
use dailycheck_core::types::{CalendarDate, DbId};
use sqlx::PgPool;

use crate::models::response::SubmissionOutcome;
use crate::repositories::{MemberRepo, ResponseRepo};

/// Writes a member's submission for one day.
pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Store `values` as `member_name`'s response to the form on `date`.
    ///
    /// The member and the day's response are created on first use and
    /// reused afterwards; the response's previous values are replaced.
    /// Everything commits together or not at all.
    pub async fn submit(
        pool: &PgPool,
        form_id: DbId,
        member_name: &str,
        date: CalendarDate,
        values: &[EncodedValue],
    ) -> Result<SubmissionOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let member = MemberRepo::upsert(&mut tx, form_id, member_name).await?;
        let (response, created) =
            ResponseRepo::upsert_for_day(&mut tx, form_id, member.id, date).await?;
        ResponseRepo::replace_values(&mut tx, response.id, values).await?;

        tx.commit().await?;

        Ok(SubmissionOutcome {
            response_id: response.id,
            member_id: member.id,
            date,
            created,
        })
    }
}
