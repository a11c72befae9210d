//! Owner-scoped entry persistence.
//!
//! The three entry kinds share the same read/delete shapes, so those are
//! generic over [`OwnedEntry`]; inserts and partial updates differ per kind
//! and live in the submodules. `delete_by_id` takes only an id and trusts the
//! caller to have verified ownership via `find_one_by_owner_and_id` first.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::models::habit::HabitEntry;
use crate::models::mood::MoodEntry;
use crate::models::sleep::SleepEntry;

pub mod habits;
pub mod moods;
pub mod sleep;

/// A per-user timestamped entry kind backed by one table.
///
/// Every backing table has `id`, `user_id`, `occurred_at`, `created_at`, and
/// `updated_at` columns; the remaining columns are kind-specific.
pub trait OwnedEntry: for<'r> FromRow<'r, PgRow> + Send + Unpin {
    const TABLE: &'static str;
}

impl OwnedEntry for MoodEntry {
    const TABLE: &'static str = "moods";
}

impl OwnedEntry for HabitEntry {
    const TABLE: &'static str = "habits";
}

impl OwnedEntry for SleepEntry {
    const TABLE: &'static str = "sleep";
}

/// All of one owner's entries, most recent first.
pub async fn list_by_owner<T: OwnedEntry>(db: &PgPool, owner_id: Uuid) -> sqlx::Result<Vec<T>> {
    let sql = format!(
        "SELECT * FROM {} WHERE user_id = $1 ORDER BY occurred_at DESC",
        T::TABLE
    );
    sqlx::query_as::<_, T>(&sql).bind(owner_id).fetch_all(db).await
}

/// Entries whose `occurred_at` falls inside the given calendar date,
/// earliest first.
pub async fn find_by_owner_and_date<T: OwnedEntry>(
    db: &PgPool,
    owner_id: Uuid,
    date: NaiveDate,
) -> sqlx::Result<Vec<T>> {
    let (start, end) = day_bounds(date);
    let sql = format!(
        "SELECT * FROM {} WHERE user_id = $1 AND occurred_at BETWEEN $2 AND $3 ORDER BY occurred_at ASC",
        T::TABLE
    );
    sqlx::query_as::<_, T>(&sql)
        .bind(owner_id)
        .bind(start)
        .bind(end)
        .fetch_all(db)
        .await
}

/// Owner-scoped lookup; a mismatched owner is indistinguishable from a
/// nonexistent id.
pub async fn find_one_by_owner_and_id<T: OwnedEntry>(
    db: &PgPool,
    owner_id: Uuid,
    id: Uuid,
) -> sqlx::Result<Option<T>> {
    let sql = format!("SELECT * FROM {} WHERE id = $1 AND user_id = $2", T::TABLE);
    sqlx::query_as::<_, T>(&sql)
        .bind(id)
        .bind(owner_id)
        .fetch_optional(db)
        .await
}

pub async fn delete_by_id<T: OwnedEntry>(db: &PgPool, id: Uuid) -> sqlx::Result<()> {
    let sql = format!("DELETE FROM {} WHERE id = $1", T::TABLE);
    sqlx::query(&sql).bind(id).execute(db).await?;
    Ok(())
}

/// Inclusive [00:00:00.000, 23:59:59.999] window of a calendar date.
pub fn day_bounds(date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = date.and_hms_opt(0, 0, 0).expect("midnight is a valid time");
    let end = date
        .and_hms_milli_opt(23, 59, 59, 999)
        .expect("23:59:59.999 is a valid time");
    (start.and_utc(), end.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn day_bounds_cover_the_whole_date() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let (start, end) = day_bounds(date);

        assert_eq!(start, Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap());
        assert_eq!(end.date_naive(), date);
        assert_eq!((end.hour(), end.minute(), end.second()), (23, 59, 59));
        assert_eq!(end.timestamp_subsec_millis(), 999);

        // Next midnight is outside the window.
        let next_midnight = Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap();
        assert!(end < next_midnight);
    }
}
