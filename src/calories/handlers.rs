use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Form, Json, Router,
};
use tracing::{info, instrument};

use crate::{
    auth::session::CurrentUser,
    calories::{
        bmr::calculate_bmr,
        dto::{CalorieForm, CalorieProfileView},
        repo::CalorieProfile,
    },
    error::{flash_redirect, AppError},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/calorie-tracker",
            get(get_calorie_tracker).post(post_calorie_tracker),
        )
        .route("/reset-calorie-tracker", get(reset_calorie_tracker))
}

#[instrument(skip(state, form))]
pub async fn post_calorie_tracker(
    State(state): State<AppState>,
    user: CurrentUser,
    Form(form): Form<CalorieForm>,
) -> Result<Response, AppError> {
    if form.weight <= 0.0 || form.height <= 0.0 || form.age <= 0 {
        return Err(AppError::Validation(
            "Weight, height and age must be positive".into(),
        ));
    }

    let bmr = calculate_bmr(form.weight, form.height, form.age, &form.goal);
    let profile = CalorieProfile::create(
        &state.db,
        user.user_id,
        form.weight,
        form.height,
        form.age,
        &form.goal,
        bmr,
    )
    .await?;

    info!(user_id = user.user_id, profile_id = profile.id, bmr, "calorie profile stored");
    Ok(flash_redirect(
        "/calorie-tracker",
        "success",
        "Calorie needs calculated!",
    ))
}

#[instrument(skip(state))]
pub async fn get_calorie_tracker(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Option<CalorieProfileView>>, AppError> {
    let profile = CalorieProfile::find_first_for_user(&state.db, user.user_id).await?;
    Ok(Json(profile.map(|p| CalorieProfileView {
        id: p.id,
        weight: p.weight,
        height: p.height,
        age: p.age,
        goal: p.goal,
        bmr: p.bmr,
    })))
}

/// Deletes only the first profile row, matching what the read shows.
#[instrument(skip(state))]
pub async fn reset_calorie_tracker(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Response, AppError> {
    if let Some(profile) = CalorieProfile::find_first_for_user(&state.db, user.user_id).await? {
        CalorieProfile::delete(&state.db, profile.id).await?;
        info!(user_id = user.user_id, profile_id = profile.id, "calorie profile reset");
        return Ok(flash_redirect(
            "/calorie-tracker",
            "info",
            "Calorie tracker data reset successfully!",
        ));
    }
    Ok(Redirect::to("/calorie-tracker").into_response())
}
