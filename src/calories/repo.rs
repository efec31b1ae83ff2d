use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use crate::error::AppError;

/// Calorie profile row. Submissions only ever insert, so a user can
/// accumulate several rows; reads take the first by insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CalorieProfile {
    pub id: i64,
    pub user_id: i64,
    pub weight: f64,
    pub height: f64,
    pub age: i64,
    pub goal: String,
    pub bmr: f64,
}

impl CalorieProfile {
    pub async fn create(
        db: &SqlitePool,
        user_id: i64,
        weight: f64,
        height: f64,
        age: i64,
        goal: &str,
        bmr: f64,
    ) -> Result<CalorieProfile, AppError> {
        let profile = sqlx::query_as::<_, CalorieProfile>(
            r#"
            INSERT INTO calorie_profiles (user_id, weight, height, age, goal, bmr)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING id, user_id, weight, height, age, goal, bmr
            "#,
        )
        .bind(user_id)
        .bind(weight)
        .bind(height)
        .bind(age)
        .bind(goal)
        .bind(bmr)
        .fetch_one(db)
        .await?;
        Ok(profile)
    }

    /// First row by insertion order, not the most recent submission.
    pub async fn find_first_for_user(
        db: &SqlitePool,
        user_id: i64,
    ) -> Result<Option<CalorieProfile>, AppError> {
        let profile = sqlx::query_as::<_, CalorieProfile>(
            r#"
            SELECT id, user_id, weight, height, age, goal, bmr
            FROM calorie_profiles
            WHERE user_id = ?1
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(db)
        .await?;
        Ok(profile)
    }

    pub async fn delete(db: &SqlitePool, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM calorie_profiles WHERE id = ?1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(())
    }
}
