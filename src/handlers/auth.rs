use axum::{extract::State, http::StatusCode, Extension, Json};
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;
use validator::Validate;

use crate::auth::{
    jwt::{clear_session_cookie, create_session_token, session_cookie},
    middleware::AuthUser,
    password::{hash_password, verify_password},
};
use crate::config::Config;
use crate::dto::{
    AuthUserResponse, LoginRequest, MessageResponse, SignupRequest, UpdateProfileRequest,
};
use crate::error::{AppError, AppResult};
use crate::models::user::User;
use crate::AppState;

pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<SignupRequest>,
) -> AppResult<(StatusCode, CookieJar, Json<AuthUserResponse>)> {
    body.validate()?;

    let password_hash = hash_password(&body.password)?;

    // The insert is the single source of truth for email uniqueness; a
    // check-then-insert would race against concurrent signups.
    let result = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, full_name, email, password_hash)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&body.full_name)
    .bind(&body.email)
    .bind(&password_hash)
    .fetch_one(&state.db)
    .await;

    let user = match result {
        Ok(user) => user,
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            return Err(AppError::Conflict("Email already exists.".into()));
        }
        Err(e) => return Err(e.into()),
    };

    let token = create_session_token(user.id, &state.config)?;
    let jar = jar.add(session_cookie(token, &state.config));

    Ok((StatusCode::CREATED, jar, Json(user.into())))
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginRequest>,
) -> AppResult<(CookieJar, Json<AuthUserResponse>)> {
    body.validate()?;

    // Same generic failure for unknown email and wrong password, so the
    // response never confirms whether an account exists.
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(&body.email)
        .fetch_optional(&state.db)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !verify_password(&body.password, &user.password_hash)? {
        return Err(AppError::InvalidCredentials);
    }

    let token = create_session_token(user.id, &state.config)?;
    let jar = jar.add(session_cookie(token, &state.config));

    Ok((jar, Json(user.into())))
}

pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    let jar = jar.add(clear_session_cookie(&state.config));
    (jar, Json(MessageResponse::new("Logged out successfully.")))
}

pub async fn me(Extension(auth_user): Extension<AuthUser>) -> Json<AuthUserResponse> {
    Json(AuthUserResponse {
        id: auth_user.id,
        full_name: auth_user.full_name,
        email: auth_user.email,
        profile_pic: auth_user.profile_pic,
    })
}

pub async fn update_profile(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<UpdateProfileRequest>,
) -> AppResult<Json<AuthUserResponse>> {
    body.validate()?;

    let picture_url = upload_to_media_host(&state.config, &body.profile_pic)
        .await
        .map_err(AppError::Internal)?;

    let user = sqlx::query_as::<_, User>(
        r#"
        UPDATE users SET profile_pic = $2, updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(auth_user.id)
    .bind(&picture_url)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(user.into()))
}

/// Hand the submitted image to the external media host and return the hosted
/// URL. Without a configured host the value is stored as submitted.
async fn upload_to_media_host(config: &Config, image: &str) -> Result<String, anyhow::Error> {
    let Some(upload_url) = config.media_upload_url.as_deref() else {
        return Ok(image.to_string());
    };

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()?;

    let response = client
        .post(upload_url)
        .json(&serde_json::json!({ "image": image }))
        .send()
        .await?;

    if !response.status().is_success() {
        anyhow::bail!("Media host error {}", response.status());
    }

    let body: serde_json::Value = response.json().await?;
    body["url"]
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| anyhow::anyhow!("Media host response missing url"))
}
