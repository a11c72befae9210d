use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One timed habit session. `duration_minutes` is derived from the two
/// boundary times and never accepted from the client.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct HabitEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub habit_name: String,
    pub note: Option<String>,
    pub tags: Vec<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration_minutes: f64,
    pub occurred_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Elapsed minutes between the two boundary times, fractional.
pub fn duration_minutes(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    (end - start).num_milliseconds() as f64 / 60_000.0
}

/// Duration for a partial update: `Some` whenever either boundary moved,
/// merging the payload with the stored value for the boundary it left out;
/// `None` when neither moved, leaving the stored duration untouched.
pub fn recompute_duration(
    stored_start: DateTime<Utc>,
    stored_end: DateTime<Utc>,
    new_start: Option<DateTime<Utc>>,
    new_end: Option<DateTime<Utc>>,
) -> Option<f64> {
    if new_start.is_none() && new_end.is_none() {
        return None;
    }
    let start = new_start.unwrap_or(stored_start);
    let end = new_end.unwrap_or(stored_end);
    Some(duration_minutes(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn duration_is_exact_minutes() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 5, 1, 10, 30, 0).unwrap();
        assert_eq!(duration_minutes(start, end), 90.0);
    }

    #[test]
    fn duration_keeps_fractional_minutes() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 30).unwrap();
        assert_eq!(duration_minutes(start, end), 0.5);
    }

    #[test]
    fn duration_is_negative_when_end_precedes_start() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        assert_eq!(duration_minutes(start, end), -60.0);
    }

    #[test]
    fn recompute_uses_stored_end_when_only_start_moves() {
        let stored_start = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let stored_end = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let new_start = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();

        let duration = recompute_duration(stored_start, stored_end, Some(new_start), None);
        assert_eq!(duration, Some(30.0));
    }

    #[test]
    fn recompute_uses_stored_start_when_only_end_moves() {
        let stored_start = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let stored_end = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let new_end = Utc.with_ymd_and_hms(2024, 5, 1, 11, 15, 0).unwrap();

        let duration = recompute_duration(stored_start, stored_end, None, Some(new_end));
        assert_eq!(duration, Some(135.0));
    }

    #[test]
    fn recompute_uses_both_boundaries_when_both_move() {
        let stored_start = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let stored_end = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let new_start = Utc.with_ymd_and_hms(2024, 5, 2, 8, 0, 0).unwrap();
        let new_end = Utc.with_ymd_and_hms(2024, 5, 2, 8, 45, 0).unwrap();

        let duration =
            recompute_duration(stored_start, stored_end, Some(new_start), Some(new_end));
        assert_eq!(duration, Some(45.0));
    }

    #[test]
    fn recompute_leaves_duration_untouched_when_neither_moves() {
        let stored_start = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let stored_end = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();

        assert_eq!(recompute_duration(stored_start, stored_end, None, None), None);
    }
}
