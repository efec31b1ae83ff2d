use serde::{Deserialize, Serialize};

/// Form body for adding a habit. An empty reminder field means no reminder.
#[derive(Debug, Deserialize)]
pub struct HabitForm {
    pub habit_name: String,
    #[serde(default)]
    pub reminder_time: Option<String>,
}

/// View data for one habit row.
#[derive(Debug, Serialize)]
pub struct HabitView {
    pub id: i64,
    pub name: String,
    pub reminder_time: Option<String>,
    pub completed: bool,
}
