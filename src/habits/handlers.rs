use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Form, Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::session::CurrentUser,
    error::{flash_redirect, AppError},
    habits::{
        dto::{HabitForm, HabitView},
        repo::Habit,
    },
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/habit-tracker", get(list_habits).post(add_habit))
        .route("/remove-habit/:id", get(remove_habit))
        .route("/complete-habit/:id", get(complete_habit))
}

#[instrument(skip(state, form))]
pub async fn add_habit(
    State(state): State<AppState>,
    user: CurrentUser,
    Form(form): Form<HabitForm>,
) -> Result<Response, AppError> {
    let name = form.habit_name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Habit name is required".into()));
    }
    let reminder = form
        .reminder_time
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty());

    let habit = Habit::create(&state.db, user.user_id, name, reminder).await?;

    info!(user_id = user.user_id, habit_id = habit.id, "habit added");
    Ok(flash_redirect(
        "/habit-tracker",
        "success",
        "Habit added successfully!",
    ))
}

#[instrument(skip(state))]
pub async fn list_habits(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Vec<HabitView>>, AppError> {
    let habits = Habit::list_for_user(&state.db, user.user_id).await?;
    let items = habits
        .into_iter()
        .map(|h| HabitView {
            id: h.id,
            name: h.name,
            reminder_time: h.reminder_time,
            completed: h.completed,
        })
        .collect();
    Ok(Json(items))
}

/// An ownership mismatch here redirects without a flash and changes
/// nothing; completion below rejects with Unauthorized instead. The two
/// routes are intentionally asymmetric (see DESIGN.md).
#[instrument(skip(state))]
pub async fn remove_habit(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let habit = Habit::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound)?;

    if habit.user_id != user.user_id {
        warn!(user_id = user.user_id, habit_id = id, "remove-habit ownership mismatch");
        return Ok(Redirect::to("/habit-tracker").into_response());
    }

    Habit::delete(&state.db, id).await?;
    info!(user_id = user.user_id, habit_id = id, "habit removed");
    Ok(flash_redirect(
        "/habit-tracker",
        "info",
        "Habit removed successfully.",
    ))
}

#[instrument(skip(state))]
pub async fn complete_habit(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let habit = Habit::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound)?;

    if habit.user_id != user.user_id {
        warn!(user_id = user.user_id, habit_id = id, "complete-habit ownership mismatch");
        return Err(AppError::Unauthorized);
    }

    Habit::mark_completed(&state.db, id).await?;
    info!(user_id = user.user_id, habit_id = id, "habit completed");
    Ok(flash_redirect(
        "/habit-tracker",
        "success",
        "Habit marked as completed!",
    ))
}
