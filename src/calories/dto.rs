use serde::{Deserialize, Serialize};

/// Form body for a calorie-needs submission.
#[derive(Debug, Deserialize)]
pub struct CalorieForm {
    pub weight: f64,
    pub height: f64,
    pub age: i64,
    pub goal: String,
}

/// View data for the calorie tracker page.
#[derive(Debug, Serialize)]
pub struct CalorieProfileView {
    pub id: i64,
    pub weight: f64,
    pub height: f64,
    pub age: i64,
    pub goal: String,
    pub bmr: f64,
}
