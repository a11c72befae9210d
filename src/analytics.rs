//! Owner-scoped aggregate statistics, computed in a single pass over the
//! owner's full entry collection.
//!
//! Every stats shape has a fixed zero/null-filled form for owners with no
//! entries; clients rely on every field always being present.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::habit::HabitEntry;
use crate::models::mood::MoodEntry;
use crate::models::sleep::SleepEntry;

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodStats {
    pub average_mood: f64,
    pub highest: i32,
    pub lowest: i32,
    pub total_entries: i64,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitStats {
    pub total_habits: i64,
    pub total_duration: f64,
    pub avg_duration: f64,
    pub earliest_start: Option<DateTime<Utc>>,
    pub latest_end: Option<DateTime<Utc>>,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepStats {
    pub avg_hours: f64,
    pub avg_quality: f64,
    pub total_entries: i64,
    pub min_hours: f64,
    pub max_hours: f64,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardRow {
    pub habit: String,
    pub total_time: f64,
    pub entries: i64,
    pub avg_duration: f64,
}

pub fn mood_stats(entries: &[MoodEntry]) -> MoodStats {
    if entries.is_empty() {
        return MoodStats {
            average_mood: 0.0,
            highest: 0,
            lowest: 0,
            total_entries: 0,
        };
    }

    let mut sum: i64 = 0;
    let mut highest = i32::MIN;
    let mut lowest = i32::MAX;
    for entry in entries {
        sum += i64::from(entry.mood_score);
        highest = highest.max(entry.mood_score);
        lowest = lowest.min(entry.mood_score);
    }

    MoodStats {
        average_mood: sum as f64 / entries.len() as f64,
        highest,
        lowest,
        total_entries: entries.len() as i64,
    }
}

pub fn habit_stats(entries: &[HabitEntry]) -> HabitStats {
    if entries.is_empty() {
        return HabitStats {
            total_habits: 0,
            total_duration: 0.0,
            avg_duration: 0.0,
            earliest_start: None,
            latest_end: None,
        };
    }

    let mut total_duration = 0.0;
    let mut earliest_start = entries[0].start_time;
    let mut latest_end = entries[0].end_time;
    for entry in entries {
        total_duration += entry.duration_minutes;
        earliest_start = earliest_start.min(entry.start_time);
        latest_end = latest_end.max(entry.end_time);
    }

    HabitStats {
        total_habits: entries.len() as i64,
        total_duration,
        avg_duration: total_duration / entries.len() as f64,
        earliest_start: Some(earliest_start),
        latest_end: Some(latest_end),
    }
}

pub fn sleep_stats(entries: &[SleepEntry]) -> SleepStats {
    if entries.is_empty() {
        return SleepStats {
            avg_hours: 0.0,
            avg_quality: 0.0,
            total_entries: 0,
            min_hours: 0.0,
            max_hours: 0.0,
        };
    }

    let mut hours_sum = 0.0;
    let mut quality_sum: i64 = 0;
    let mut min_hours = entries[0].sleep_hours;
    let mut max_hours = entries[0].sleep_hours;
    for entry in entries {
        hours_sum += entry.sleep_hours;
        quality_sum += i64::from(entry.quality);
        min_hours = min_hours.min(entry.sleep_hours);
        max_hours = max_hours.max(entry.sleep_hours);
    }

    let count = entries.len() as f64;
    SleepStats {
        avg_hours: hours_sum / count,
        avg_quality: quality_sum as f64 / count,
        total_entries: entries.len() as i64,
        min_hours,
        max_hours,
    }
}

/// Group habit entries by name and rank by total time spent, descending.
///
/// Groups accumulate in first-seen order and the sort is stable, so equal
/// totals keep a deterministic first-inserted-first order across calls.
pub fn habit_leaderboard(entries: &[HabitEntry]) -> Vec<LeaderboardRow> {
    let mut rows: Vec<LeaderboardRow> = Vec::new();

    for entry in entries {
        match rows.iter_mut().find(|r| r.habit == entry.habit_name) {
            Some(row) => {
                row.total_time += entry.duration_minutes;
                row.entries += 1;
            }
            None => rows.push(LeaderboardRow {
                habit: entry.habit_name.clone(),
                total_time: entry.duration_minutes,
                entries: 1,
                avg_duration: 0.0,
            }),
        }
    }

    for row in &mut rows {
        row.avg_duration = row.total_time / row.entries as f64;
    }

    rows.sort_by(|a, b| {
        b.total_time
            .partial_cmp(&a.total_time)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    rows
}
