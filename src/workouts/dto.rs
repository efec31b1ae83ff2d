use serde::{Deserialize, Serialize};

/// Form body for adding a workout.
#[derive(Debug, Deserialize)]
pub struct WorkoutForm {
    pub workout_name: String,
    pub day_of_week: String,
}

/// View data for one workout row.
#[derive(Debug, Serialize)]
pub struct WorkoutView {
    pub id: i64,
    pub name: String,
    pub day_of_week: String,
}
