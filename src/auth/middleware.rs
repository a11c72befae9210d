use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use crate::auth::jwt::{verify_token, SESSION_COOKIE};
use crate::error::AppError;
use crate::models::user::User;
use crate::AppState;

/// The resolved, password-stripped session identity attached to every
/// authenticated request.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub profile_pic: Option<String>,
}

/// Verify the session cookie and resolve it to an existing user.
///
/// A token whose subject no longer exists (deleted account) resolves to 404,
/// distinct from the 401s for a missing or invalid token.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let jar = CookieJar::from_headers(req.headers());
    let token = jar
        .get(SESSION_COOKIE)
        .map(|c| c.value().to_owned())
        .ok_or(AppError::Unauthenticated)?;

    let token_data = verify_token(&token, &state.config)?;

    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(token_data.claims.sub)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found.".into()))?;

    let auth_user = AuthUser {
        id: user.id,
        full_name: user.full_name,
        email: user.email,
        profile_pic: user.profile_pic,
    };

    req.extensions_mut().insert(auth_user);
    Ok(next.run(req).await)
}
