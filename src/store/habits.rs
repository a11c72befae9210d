use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::UpdateHabitRequest;
use crate::models::habit::HabitEntry;

#[allow(clippy::too_many_arguments)]
pub async fn insert(
    db: &PgPool,
    owner_id: Uuid,
    habit_name: &str,
    note: Option<&str>,
    tags: &[String],
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    duration_minutes: f64,
) -> sqlx::Result<HabitEntry> {
    sqlx::query_as::<_, HabitEntry>(
        r#"
        INSERT INTO habits (id, user_id, habit_name, note, tags, start_time, end_time, duration_minutes)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(owner_id)
    .bind(habit_name)
    .bind(note)
    .bind(tags)
    .bind(start_time)
    .bind(end_time)
    .bind(duration_minutes)
    .fetch_one(db)
    .await
}

/// Partial update; `duration_minutes` is supplied by the service whenever
/// either boundary time changed and is never taken from the client payload.
pub async fn update(
    db: &PgPool,
    id: Uuid,
    body: &UpdateHabitRequest,
    duration_minutes: Option<f64>,
) -> sqlx::Result<HabitEntry> {
    sqlx::query_as::<_, HabitEntry>(
        r#"
        UPDATE habits SET
            habit_name = COALESCE($2, habit_name),
            note = COALESCE($3, note),
            tags = COALESCE($4, tags),
            start_time = COALESCE($5, start_time),
            end_time = COALESCE($6, end_time),
            duration_minutes = COALESCE($7, duration_minutes),
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&body.habit)
    .bind(&body.note)
    .bind(&body.tags)
    .bind(body.start_time)
    .bind(body.end_time)
    .bind(duration_minutes)
    .fetch_one(db)
    .await
}
