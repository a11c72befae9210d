use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::UpdateMoodRequest;
use crate::models::mood::MoodEntry;

pub async fn insert(
    db: &PgPool,
    owner_id: Uuid,
    mood_score: i32,
    note: Option<&str>,
    tags: &[String],
) -> sqlx::Result<MoodEntry> {
    sqlx::query_as::<_, MoodEntry>(
        r#"
        INSERT INTO moods (id, user_id, mood_score, note, tags)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(owner_id)
    .bind(mood_score)
    .bind(note)
    .bind(tags)
    .fetch_one(db)
    .await
}

/// Partial update; absent fields keep their stored values. Ownership must
/// already be verified by the caller.
pub async fn update(db: &PgPool, id: Uuid, body: &UpdateMoodRequest) -> sqlx::Result<MoodEntry> {
    sqlx::query_as::<_, MoodEntry>(
        r#"
        UPDATE moods SET
            mood_score = COALESCE($2, mood_score),
            note = COALESCE($3, note),
            tags = COALESCE($4, tags),
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(body.mood)
    .bind(&body.note)
    .bind(&body.tags)
    .fetch_one(db)
    .await
}
