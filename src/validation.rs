//! Per-kind entry validation.
//!
//! All presence, type, and range rules for mood/habit/sleep payloads are
//! enforced here in one tier; the database schema carries only NOT NULL and
//! uniqueness constraints. Update variants check only the fields present.

use crate::dto::{
    CreateHabitRequest, CreateMoodRequest, CreateSleepRequest, UpdateHabitRequest,
    UpdateMoodRequest, UpdateSleepRequest,
};
use crate::error::{AppError, AppResult};

const MOOD_RANGE: std::ops::RangeInclusive<i32> = 1..=10;
const ENERGY_RANGE: std::ops::RangeInclusive<i32> = 1..=5;
const QUALITY_RANGE: std::ops::RangeInclusive<i32> = 1..=10;

/// Returns the validated mood score.
pub fn mood_create(body: &CreateMoodRequest) -> AppResult<i32> {
    let mood = body
        .mood
        .ok_or_else(|| AppError::Validation("Mood is required.".into()))?;
    check_mood_range(mood)?;
    Ok(mood)
}

pub fn mood_update(body: &UpdateMoodRequest) -> AppResult<()> {
    if let Some(mood) = body.mood {
        check_mood_range(mood)?;
    }
    Ok(())
}

fn check_mood_range(mood: i32) -> AppResult<()> {
    if MOOD_RANGE.contains(&mood) {
        Ok(())
    } else {
        Err(AppError::Validation(
            "Mood must be a number between 1 and 10.".into(),
        ))
    }
}

/// Returns the validated (name, start, end) triple.
pub fn habit_create(
    body: &CreateHabitRequest,
) -> AppResult<(
    &str,
    chrono::DateTime<chrono::Utc>,
    chrono::DateTime<chrono::Utc>,
)> {
    let (Some(habit), Some(start), Some(end)) = (&body.habit, body.start_time, body.end_time)
    else {
        return Err(AppError::Validation(
            "Please fill in the required fields.".into(),
        ));
    };
    if habit.trim().is_empty() {
        return Err(AppError::Validation(
            "The habit should be presented by characters.".into(),
        ));
    }
    Ok((habit.as_str(), start, end))
}

pub fn habit_update(body: &UpdateHabitRequest) -> AppResult<()> {
    if let Some(habit) = &body.habit {
        if habit.trim().is_empty() {
            return Err(AppError::Validation(
                "The habit should be presented by characters.".into(),
            ));
        }
    }
    Ok(())
}

/// Returns the validated (hours, energy, quality) triple.
pub fn sleep_create(body: &CreateSleepRequest) -> AppResult<(f64, i32, i32)> {
    let (Some(hours), Some(energy), Some(quality)) =
        (body.sleep_hours, body.energy_level, body.quality)
    else {
        return Err(AppError::Validation(
            "Please fill in the required fields with valid numbers!".into(),
        ));
    };
    check_sleep_hours(hours)?;
    check_energy_range(energy)?;
    check_quality_range(quality)?;
    Ok((hours, energy, quality))
}

pub fn sleep_update(body: &UpdateSleepRequest) -> AppResult<()> {
    if let Some(hours) = body.sleep_hours {
        check_sleep_hours(hours)?;
    }
    if let Some(energy) = body.energy_level {
        check_energy_range(energy)?;
    }
    if let Some(quality) = body.quality {
        check_quality_range(quality)?;
    }
    Ok(())
}

fn check_sleep_hours(hours: f64) -> AppResult<()> {
    if hours.is_finite() && (0.0..=24.0).contains(&hours) {
        Ok(())
    } else {
        Err(AppError::Validation(
            "Sleep hours must be a number between 0 and 24.".into(),
        ))
    }
}

fn check_energy_range(energy: i32) -> AppResult<()> {
    if ENERGY_RANGE.contains(&energy) {
        Ok(())
    } else {
        Err(AppError::Validation(
            "Energy level must be between 1 and 5.".into(),
        ))
    }
}

fn check_quality_range(quality: i32) -> AppResult<()> {
    if QUALITY_RANGE.contains(&quality) {
        Ok(())
    } else {
        Err(AppError::Validation(
            "Quality must be between 1 and 10.".into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn mood_req(mood: Option<i32>) -> CreateMoodRequest {
        CreateMoodRequest {
            mood,
            note: None,
            tags: vec![],
        }
    }

    #[test]
    fn mood_create_requires_mood() {
        assert!(mood_create(&mood_req(None)).is_err());
    }

    #[test]
    fn mood_create_enforces_range_on_both_bounds() {
        assert!(mood_create(&mood_req(Some(0))).is_err());
        assert!(mood_create(&mood_req(Some(11))).is_err());
        assert_eq!(mood_create(&mood_req(Some(1))).unwrap(), 1);
        assert_eq!(mood_create(&mood_req(Some(10))).unwrap(), 10);
    }

    #[test]
    fn mood_update_skips_absent_mood() {
        let body = UpdateMoodRequest {
            mood: None,
            note: Some("fine".into()),
            tags: None,
        };
        assert!(mood_update(&body).is_ok());

        let body = UpdateMoodRequest {
            mood: Some(12),
            note: None,
            tags: None,
        };
        assert!(mood_update(&body).is_err());
    }

    #[test]
    fn habit_create_requires_name_and_both_times() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();

        let body = CreateHabitRequest {
            habit: Some("Reading".into()),
            note: None,
            tags: vec![],
            start_time: Some(start),
            end_time: None,
        };
        assert!(habit_create(&body).is_err());

        let body = CreateHabitRequest {
            habit: Some("   ".into()),
            note: None,
            tags: vec![],
            start_time: Some(start),
            end_time: Some(end),
        };
        assert!(habit_create(&body).is_err());

        let body = CreateHabitRequest {
            habit: Some("Reading".into()),
            note: None,
            tags: vec![],
            start_time: Some(start),
            end_time: Some(end),
        };
        assert_eq!(habit_create(&body).unwrap(), ("Reading", start, end));
    }

    #[test]
    fn sleep_create_enforces_all_ranges() {
        let req = |h, e, q| CreateSleepRequest {
            sleep_hours: Some(h),
            energy_level: Some(e),
            quality: Some(q),
            note: None,
            date: None,
        };
        assert!(sleep_create(&req(7.5, 3, 8)).is_ok());
        assert!(sleep_create(&req(25.0, 3, 8)).is_err());
        assert!(sleep_create(&req(-1.0, 3, 8)).is_err());
        assert!(sleep_create(&req(7.5, 0, 8)).is_err());
        assert!(sleep_create(&req(7.5, 6, 8)).is_err());
        assert!(sleep_create(&req(7.5, 3, 0)).is_err());
        assert!(sleep_create(&req(7.5, 3, 11)).is_err());
        assert!(sleep_create(&req(f64::NAN, 3, 8)).is_err());
    }

    #[test]
    fn sleep_create_requires_all_three() {
        let body = CreateSleepRequest {
            sleep_hours: Some(7.0),
            energy_level: None,
            quality: Some(8),
            note: None,
            date: None,
        };
        assert!(sleep_create(&body).is_err());
    }

    #[test]
    fn sleep_update_checks_only_supplied_fields() {
        let body = UpdateSleepRequest {
            sleep_hours: None,
            energy_level: None,
            quality: None,
            note: Some("restless".into()),
        };
        assert!(sleep_update(&body).is_ok());

        let body = UpdateSleepRequest {
            sleep_hours: Some(30.0),
            energy_level: None,
            quality: None,
            note: None,
        };
        assert!(sleep_update(&body).is_err());
    }
}
