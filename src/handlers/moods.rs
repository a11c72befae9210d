use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use uuid::Uuid;

use crate::analytics::{self, MoodStats};
use crate::auth::middleware::AuthUser;
use crate::dto::{ByDateQuery, CreateMoodRequest, MessageResponse, UpdateMoodRequest};
use crate::error::{AppError, AppResult};
use crate::models::mood::MoodEntry;
use crate::{store, validation, AppState};

pub async fn add_mood(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<CreateMoodRequest>,
) -> AppResult<(StatusCode, Json<MoodEntry>)> {
    let mood_score = validation::mood_create(&body)?;

    let entry = store::moods::insert(
        &state.db,
        auth_user.id,
        mood_score,
        body.note.as_deref(),
        &body.tags,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn get_moods(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<Vec<MoodEntry>>> {
    let entries = store::list_by_owner::<MoodEntry>(&state.db, auth_user.id).await?;
    Ok(Json(entries))
}

/// Unlike habits and sleep, a date maps to at most one mood: the first
/// entry of that day.
pub async fn get_mood_by_date(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<ByDateQuery>,
) -> AppResult<Json<MoodEntry>> {
    let entries =
        store::find_by_owner_and_date::<MoodEntry>(&state.db, auth_user.id, query.date).await?;

    let entry = entries
        .into_iter()
        .next()
        .ok_or_else(|| AppError::NotFound("No mood found for this date.".into()))?;

    Ok(Json(entry))
}

pub async fn update_mood(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(mood_id): Path<Uuid>,
    Json(body): Json<UpdateMoodRequest>,
) -> AppResult<Json<MoodEntry>> {
    store::find_one_by_owner_and_id::<MoodEntry>(&state.db, auth_user.id, mood_id)
        .await?
        .ok_or_else(|| AppError::NotFound("No mood was found.".into()))?;

    validation::mood_update(&body)?;

    let updated = store::moods::update(&state.db, mood_id, &body).await?;
    Ok(Json(updated))
}

pub async fn delete_mood(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(mood_id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    store::find_one_by_owner_and_id::<MoodEntry>(&state.db, auth_user.id, mood_id)
        .await?
        .ok_or_else(|| AppError::NotFound("No mood was found.".into()))?;

    store::delete_by_id::<MoodEntry>(&state.db, mood_id).await?;

    Ok(Json(MessageResponse::new(
        "The mood was deleted successfully.",
    )))
}

pub async fn get_mood_analytics(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<MoodStats>> {
    let entries = store::list_by_owner::<MoodEntry>(&state.db, auth_user.id).await?;
    Ok(Json(analytics::mood_stats(&entries)))
}
