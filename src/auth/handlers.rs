use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Form, Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{DashboardView, LoginForm, SignupForm},
        password::{hash_password, verify_password},
        repo::User,
        session::{self, CurrentUser, SESSION_COOKIE},
    },
    error::{flash_redirect, AppError},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/logout", get(logout))
        .route("/dashboard", get(dashboard))
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

#[instrument(skip(state, form))]
pub async fn signup(
    State(state): State<AppState>,
    Form(mut form): Form<SignupForm>,
) -> Result<impl IntoResponse, AppError> {
    form.email = form.email.trim().to_lowercase();
    form.username = form.username.trim().to_string();

    if form.username.is_empty() {
        warn!("signup with empty username");
        return Err(AppError::Validation("Username is required".into()));
    }
    if !is_valid_email(&form.email) {
        warn!(email = %form.email, "invalid email");
        return Err(AppError::Validation("Invalid email".into()));
    }
    if form.password.len() < 8 {
        warn!("password too short");
        return Err(AppError::Validation("Password too short".into()));
    }

    // The pre-check gives the friendly redirect; the UNIQUE constraint still
    // backstops a concurrent duplicate signup.
    if User::find_by_email(&state.db, &form.email).await?.is_some() {
        warn!(email = %form.email, "email already registered");
        return Err(AppError::DuplicateEmail);
    }

    let hash = hash_password(&form.password)?;
    let user = User::create(&state.db, &form.username, &form.email, &hash).await?;

    info!(user_id = user.id, email = %user.email, "user signed up");
    Ok(flash_redirect(
        "/login",
        "success",
        "Signup successful! Please login.",
    ))
}

#[instrument(skip(state, form))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(mut form): Form<LoginForm>,
) -> Result<impl IntoResponse, AppError> {
    form.email = form.email.trim().to_lowercase();

    // Unknown email and wrong password produce the same outcome.
    let user = match User::find_by_email(&state.db, &form.email).await? {
        Some(u) => u,
        None => {
            warn!(email = %form.email, "login unknown email");
            return Err(AppError::InvalidCredentials);
        }
    };

    if !verify_password(&form.password, &user.password_hash)? {
        warn!(user_id = user.id, "login invalid password");
        return Err(AppError::InvalidCredentials);
    }

    let token = session::create_session(&state.db, &user).await?;
    let jar = jar.add(
        Cookie::build((SESSION_COOKIE, token))
            .path("/")
            .http_only(true),
    );

    info!(user_id = user.id, "user logged in");
    Ok((
        jar,
        flash_redirect("/dashboard", "success", "Login successful!"),
    ))
}

#[instrument(skip(state, jar))]
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        session::clear_session(&state.db, cookie.value()).await?;
    }
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    Ok((
        jar,
        flash_redirect("/login", "info", "Logged out successfully."),
    ))
}

#[instrument]
pub async fn dashboard(user: CurrentUser) -> Json<DashboardView> {
    Json(DashboardView {
        username: user.username,
    })
}
