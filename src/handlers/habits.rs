use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::analytics::{self, HabitStats, LeaderboardRow};
use crate::auth::middleware::AuthUser;
use crate::dto::{ByDateQuery, CreateHabitRequest, MessageResponse, UpdateHabitRequest};
use crate::error::{AppError, AppResult};
use crate::models::habit::{duration_minutes, recompute_duration, HabitEntry};
use crate::{store, validation, AppState};

#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub leaderboard: Vec<LeaderboardRow>,
}

pub async fn add_habit(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<CreateHabitRequest>,
) -> AppResult<(StatusCode, Json<HabitEntry>)> {
    let (habit_name, start_time, end_time) = validation::habit_create(&body)?;

    let entry = store::habits::insert(
        &state.db,
        auth_user.id,
        habit_name,
        body.note.as_deref(),
        &body.tags,
        start_time,
        end_time,
        duration_minutes(start_time, end_time),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn get_habits(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<Vec<HabitEntry>>> {
    let entries = store::list_by_owner::<HabitEntry>(&state.db, auth_user.id).await?;
    Ok(Json(entries))
}

pub async fn get_habits_by_date(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<ByDateQuery>,
) -> AppResult<Json<Vec<HabitEntry>>> {
    let entries =
        store::find_by_owner_and_date::<HabitEntry>(&state.db, auth_user.id, query.date).await?;

    if entries.is_empty() {
        return Err(AppError::NotFound("No habits found for this date.".into()));
    }

    Ok(Json(entries))
}

pub async fn update_habit(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(habit_id): Path<Uuid>,
    Json(body): Json<UpdateHabitRequest>,
) -> AppResult<Json<HabitEntry>> {
    let existing = store::find_one_by_owner_and_id::<HabitEntry>(&state.db, auth_user.id, habit_id)
        .await?
        .ok_or_else(|| AppError::NotFound("No habit was found.".into()))?;

    validation::habit_update(&body)?;

    let duration = recompute_duration(
        existing.start_time,
        existing.end_time,
        body.start_time,
        body.end_time,
    );

    let updated = store::habits::update(&state.db, habit_id, &body, duration).await?;
    Ok(Json(updated))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(habit_id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    store::find_one_by_owner_and_id::<HabitEntry>(&state.db, auth_user.id, habit_id)
        .await?
        .ok_or_else(|| AppError::NotFound("No habit was found.".into()))?;

    store::delete_by_id::<HabitEntry>(&state.db, habit_id).await?;

    Ok(Json(MessageResponse::new(
        "The habit was deleted successfully.",
    )))
}

pub async fn get_habit_analytics(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<HabitStats>> {
    let entries = store::list_by_owner::<HabitEntry>(&state.db, auth_user.id).await?;
    Ok(Json(analytics::habit_stats(&entries)))
}

pub async fn get_habit_leaderboard(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<LeaderboardResponse>> {
    let entries = store::list_by_owner::<HabitEntry>(&state.db, auth_user.id).await?;
    Ok(Json(LeaderboardResponse {
        leaderboard: analytics::habit_leaderboard(&entries),
    }))
}
