use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::error;

/// Everything a request handler can fail with. Each variant maps to one
/// user-visible outcome; nothing is retried or logged twice.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("email already registered")]
    DuplicateEmail,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("no valid session")]
    Unauthenticated,
    #[error("not the owner")]
    Unauthorized,
    #[error("not found")]
    NotFound,
    #[error("database error")]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// 303 redirect carrying a one-shot `flash` cookie (`level:message`), the
/// way the form flow reports outcomes to the next page.
pub fn flash_redirect(location: &str, level: &str, message: &str) -> Response {
    (
        StatusCode::SEE_OTHER,
        [
            (header::LOCATION, location.to_string()),
            (
                header::SET_COOKIE,
                format!("flash={level}:{message}; Path=/"),
            ),
        ],
    )
        .into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            AppError::DuplicateEmail => {
                flash_redirect("/login", "danger", "Email already exists. Please login.")
            }
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Invalid credentials. Try again.".to_string(),
            )
                .into_response(),
            AppError::Unauthenticated => {
                flash_redirect("/login", "warning", "Please login first.")
            }
            AppError::Unauthorized => (
                StatusCode::FORBIDDEN,
                "You do not have access to this entry.".to_string(),
            )
                .into_response(),
            AppError::NotFound => {
                (StatusCode::NOT_FOUND, "Not found".to_string()).into_response()
            }
            AppError::Database(e) => {
                error!(error = %e, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
                    .into_response()
            }
            AppError::Internal(e) => {
                error!(error = %e, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthenticated_redirects_to_login() {
        let res = AppError::Unauthenticated.into_response();
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(res.headers().get(header::LOCATION).unwrap(), "/login");
    }

    #[test]
    fn duplicate_email_redirects_to_login() {
        let res = AppError::DuplicateEmail.into_response();
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(res.headers().get(header::LOCATION).unwrap(), "/login");
    }

    #[test]
    fn unauthorized_is_forbidden() {
        assert_eq!(
            AppError::Unauthorized.into_response().status(),
            StatusCode::FORBIDDEN
        );
    }
}
