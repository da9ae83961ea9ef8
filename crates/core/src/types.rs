/// All database primary keys are UUIDs generated by PostgreSQL.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// A calendar day, serialized as `YYYY-MM-DD`.
pub type CalendarDate = chrono::NaiveDate;

/// Today's calendar date according to the server clock (UTC).
pub fn today() -> CalendarDate {
    chrono::Utc::now().date_naive()
}
