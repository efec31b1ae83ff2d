use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::auth::repo::User;
use crate::error::AppError;
use crate::state::AppState;

pub const SESSION_COOKIE: &str = "session_id";

/// Verified identity for the current request. Produced by the extractor
/// below from the session cookie and passed into handlers by value, so no
/// handler ever reads ambient session state.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CurrentUser {
    pub user_id: i64,
    pub username: String,
}

/// Issue a new opaque session token bound to the user.
pub async fn create_session(db: &SqlitePool, user: &User) -> Result<String, AppError> {
    let token = Uuid::new_v4().to_string();
    sqlx::query("INSERT INTO sessions (token, user_id, username) VALUES (?1, ?2, ?3)")
        .bind(&token)
        .bind(user.id)
        .bind(&user.username)
        .execute(db)
        .await?;
    Ok(token)
}

/// Resolve an inbound session token to an identity, if the session exists.
pub async fn resolve_session(
    db: &SqlitePool,
    token: &str,
) -> Result<Option<CurrentUser>, AppError> {
    let row = sqlx::query_as::<_, CurrentUser>(
        "SELECT user_id, username FROM sessions WHERE token = ?1",
    )
    .bind(token)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

/// Drop the session row. Deterministic even if the token is already gone.
pub async fn clear_session(db: &SqlitePool, token: &str) -> Result<(), AppError> {
    sqlx::query("DELETE FROM sessions WHERE token = ?1")
        .bind(token)
        .execute(db)
        .await?;
    Ok(())
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(SESSION_COOKIE)
            .map(|c| c.value().to_string())
            .ok_or(AppError::Unauthenticated)?;
        resolve_session(&state.db, &token)
            .await?
            .ok_or(AppError::Unauthenticated)
    }
}
