//! Request/response DTOs for the public API.
//!
//! Conventions:
//! - `*Request` → deserialized from client JSON body or query params
//! - responses are the row types in `models/` plus the shapes in `analytics`
//! - wire JSON is camelCase; auth payload rules use `validator` derives,
//!   per-entry rules live in `validation.rs`

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

// ============================================================================
// Common
// ============================================================================

/// Standard success message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// GET /by-date?date=YYYY-MM-DD
#[derive(Debug, Deserialize)]
pub struct ByDateQuery {
    pub date: NaiveDate,
}

// ============================================================================
// Auth
// ============================================================================

/// POST /api/auth/signup
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(length(min = 1, message = "All fields are required."))]
    pub full_name: String,

    #[validate(email(message = "Invalid email format."))]
    pub email: String,

    #[validate(custom = "validate_password_policy")]
    pub password: String,
}

/// POST /api/auth/login
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email and password are required."))]
    pub email: String,

    #[validate(length(min = 1, message = "Email and password are required."))]
    pub password: String,
}

/// PUT /api/auth/profile
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, message = "Profile picture is required."))]
    pub profile_pic: String,
}

/// Password-stripped identity returned by signup/login/me.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUserResponse {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub profile_pic: Option<String>,
}

impl From<crate::models::user::User> for AuthUserResponse {
    fn from(u: crate::models::user::User) -> Self {
        Self {
            id: u.id,
            full_name: u.full_name,
            email: u.email,
            profile_pic: u.profile_pic,
        }
    }
}

/// At least 8 characters, one uppercase letter, one digit.
fn validate_password_policy(password: &str) -> Result<(), ValidationError> {
    let long_enough = password.len() >= 8;
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if long_enough && has_upper && has_digit {
        Ok(())
    } else {
        let mut err = ValidationError::new("password_policy");
        err.message = Some(Cow::Borrowed(
            "Password must be at least 8 characters long, include one uppercase letter and one number.",
        ));
        Err(err)
    }
}

// ============================================================================
// Moods
// ============================================================================

/// POST /api/moods
#[derive(Debug, Deserialize)]
pub struct CreateMoodRequest {
    pub mood: Option<i32>,
    pub note: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// PUT /api/moods/{id} — partial update, absent fields stay unchanged
#[derive(Debug, Deserialize)]
pub struct UpdateMoodRequest {
    pub mood: Option<i32>,
    pub note: Option<String>,
    pub tags: Option<Vec<String>>,
}

// ============================================================================
// Habits
// ============================================================================

/// POST /api/habits
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHabitRequest {
    pub habit: Option<String>,
    pub note: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

/// PUT /api/habits/{id}
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHabitRequest {
    pub habit: Option<String>,
    pub note: Option<String>,
    pub tags: Option<Vec<String>>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

// ============================================================================
// Sleep
// ============================================================================

/// POST /api/sleep
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSleepRequest {
    pub sleep_hours: Option<f64>,
    pub energy_level: Option<i32>,
    pub quality: Option<i32>,
    pub note: Option<String>,
    /// Explicit occurred-at override; defaults to now.
    pub date: Option<DateTime<Utc>>,
}

/// PUT /api/sleep/{id}
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSleepRequest {
    pub sleep_hours: Option<f64>,
    pub energy_level: Option<i32>,
    pub quality: Option<i32>,
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_policy_accepts_conforming() {
        assert!(validate_password_policy("Abcdef12").is_ok());
    }

    #[test]
    fn password_policy_rejects_short_or_weak() {
        assert!(validate_password_policy("Ab1").is_err());
        assert!(validate_password_policy("alllowercase1").is_err());
        assert!(validate_password_policy("NoDigitsHere").is_err());
    }

    #[test]
    fn signup_request_validates_email() {
        let req = SignupRequest {
            full_name: "Test User".into(),
            email: "not-an-email".into(),
            password: "Abcdef12".into(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn create_mood_tags_default_to_empty() {
        let req: CreateMoodRequest = serde_json::from_str(r#"{"mood": 7}"#).unwrap();
        assert!(req.tags.is_empty());
        assert_eq!(req.mood, Some(7));
    }
}
