use serde::{Deserialize, Serialize};

/// Form body for user signup.
#[derive(Debug, Deserialize)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Form body for login.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// View data for the dashboard page.
#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub username: String,
}
