use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One night of sleep. Hours are fractional (0-24); energy is a 1-5 scale,
/// quality a 1-10 scale.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SleepEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub sleep_hours: f64,
    pub energy_level: i32,
    pub quality: i32,
    pub note: Option<String>,
    pub occurred_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
