use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::analytics::{self, SleepStats};
use crate::auth::middleware::AuthUser;
use crate::dto::{ByDateQuery, CreateSleepRequest, MessageResponse, UpdateSleepRequest};
use crate::error::{AppError, AppResult};
use crate::models::sleep::SleepEntry;
use crate::{store, validation, AppState};

pub async fn add_sleep(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<CreateSleepRequest>,
) -> AppResult<(StatusCode, Json<SleepEntry>)> {
    let (sleep_hours, energy_level, quality) = validation::sleep_create(&body)?;
    let occurred_at = body.date.unwrap_or_else(Utc::now);

    let entry = store::sleep::insert(
        &state.db,
        auth_user.id,
        sleep_hours,
        energy_level,
        quality,
        body.note.as_deref(),
        occurred_at,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn get_sleep(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<Vec<SleepEntry>>> {
    let entries = store::list_by_owner::<SleepEntry>(&state.db, auth_user.id).await?;
    Ok(Json(entries))
}

pub async fn get_sleep_by_date(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<ByDateQuery>,
) -> AppResult<Json<Vec<SleepEntry>>> {
    let entries =
        store::find_by_owner_and_date::<SleepEntry>(&state.db, auth_user.id, query.date).await?;

    if entries.is_empty() {
        return Err(AppError::NotFound(
            "No sleep record found for this date.".into(),
        ));
    }

    Ok(Json(entries))
}

pub async fn update_sleep(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(sleep_id): Path<Uuid>,
    Json(body): Json<UpdateSleepRequest>,
) -> AppResult<Json<SleepEntry>> {
    store::find_one_by_owner_and_id::<SleepEntry>(&state.db, auth_user.id, sleep_id)
        .await?
        .ok_or_else(|| AppError::NotFound("No sleep record was found.".into()))?;

    validation::sleep_update(&body)?;

    let updated = store::sleep::update(&state.db, sleep_id, &body).await?;
    Ok(Json(updated))
}

pub async fn delete_sleep(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(sleep_id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    store::find_one_by_owner_and_id::<SleepEntry>(&state.db, auth_user.id, sleep_id)
        .await?
        .ok_or_else(|| AppError::NotFound("No sleep record was found.".into()))?;

    store::delete_by_id::<SleepEntry>(&state.db, sleep_id).await?;

    Ok(Json(MessageResponse::new(
        "The sleep record was deleted successfully.",
    )))
}

pub async fn get_sleep_analytics(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<SleepStats>> {
    let entries = store::list_by_owner::<SleepEntry>(&state.db, auth_user.id).await?;
    Ok(Json(analytics::sleep_stats(&entries)))
}
