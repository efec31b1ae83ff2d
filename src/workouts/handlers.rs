use axum::{
    extract::{Path, State},
    response::Response,
    routing::get,
    Form, Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::session::CurrentUser,
    error::{flash_redirect, AppError},
    state::AppState,
    workouts::{
        dto::{WorkoutForm, WorkoutView},
        repo::Workout,
    },
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/workout-tracker", get(list_workouts).post(add_workout))
        .route("/remove-workout/:id", get(remove_workout))
}

#[instrument(skip(state, form))]
pub async fn add_workout(
    State(state): State<AppState>,
    user: CurrentUser,
    Form(form): Form<WorkoutForm>,
) -> Result<Response, AppError> {
    let name = form.workout_name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Workout name is required".into()));
    }

    let workout = Workout::create(&state.db, user.user_id, name, form.day_of_week.trim()).await?;

    info!(user_id = user.user_id, workout_id = workout.id, "workout added");
    Ok(flash_redirect(
        "/workout-tracker",
        "success",
        "Workout added successfully!",
    ))
}

#[instrument(skip(state))]
pub async fn list_workouts(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Vec<WorkoutView>>, AppError> {
    let workouts = Workout::list_for_user(&state.db, user.user_id).await?;
    let items = workouts
        .into_iter()
        .map(|w| WorkoutView {
            id: w.id,
            name: w.name,
            day_of_week: w.day_of_week,
        })
        .collect();
    Ok(Json(items))
}

/// Unlike habit removal, removing someone else's workout is an explicit
/// Unauthorized.
#[instrument(skip(state))]
pub async fn remove_workout(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let workout = Workout::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound)?;

    if workout.user_id != user.user_id {
        warn!(user_id = user.user_id, workout_id = id, "remove-workout ownership mismatch");
        return Err(AppError::Unauthorized);
    }

    Workout::delete(&state.db, id).await?;
    info!(user_id = user.user_id, workout_id = id, "workout removed");
    Ok(flash_redirect(
        "/workout-tracker",
        "info",
        "Workout removed successfully.",
    ))
}
