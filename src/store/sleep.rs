use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::UpdateSleepRequest;
use crate::models::sleep::SleepEntry;

pub async fn insert(
    db: &PgPool,
    owner_id: Uuid,
    sleep_hours: f64,
    energy_level: i32,
    quality: i32,
    note: Option<&str>,
    occurred_at: DateTime<Utc>,
) -> sqlx::Result<SleepEntry> {
    sqlx::query_as::<_, SleepEntry>(
        r#"
        INSERT INTO sleep (id, user_id, sleep_hours, energy_level, quality, note, occurred_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(owner_id)
    .bind(sleep_hours)
    .bind(energy_level)
    .bind(quality)
    .bind(note)
    .bind(occurred_at)
    .fetch_one(db)
    .await
}

/// Partial update; absent fields keep their stored values.
pub async fn update(db: &PgPool, id: Uuid, body: &UpdateSleepRequest) -> sqlx::Result<SleepEntry> {
    sqlx::query_as::<_, SleepEntry>(
        r#"
        UPDATE sleep SET
            sleep_hours = COALESCE($2, sleep_hours),
            energy_level = COALESCE($3, energy_level),
            quality = COALESCE($4, quality),
            note = COALESCE($5, note),
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(body.sleep_hours)
    .bind(body.energy_level)
    .bind(body.quality)
    .bind(&body.note)
    .fetch_one(db)
    .await
}
