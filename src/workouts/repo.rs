use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use crate::error::AppError;

/// Workout row, owned by exactly one user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Workout {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub day_of_week: String,
}

impl Workout {
    pub async fn create(
        db: &SqlitePool,
        user_id: i64,
        name: &str,
        day_of_week: &str,
    ) -> Result<Workout, AppError> {
        let workout = sqlx::query_as::<_, Workout>(
            r#"
            INSERT INTO workouts (user_id, name, day_of_week)
            VALUES (?1, ?2, ?3)
            RETURNING id, user_id, name, day_of_week
            "#,
        )
        .bind(user_id)
        .bind(name)
        .bind(day_of_week)
        .fetch_one(db)
        .await?;
        Ok(workout)
    }

    pub async fn list_for_user(db: &SqlitePool, user_id: i64) -> Result<Vec<Workout>, AppError> {
        let rows = sqlx::query_as::<_, Workout>(
            r#"
            SELECT id, user_id, name, day_of_week
            FROM workouts
            WHERE user_id = ?1
            ORDER BY id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn find_by_id(db: &SqlitePool, id: i64) -> Result<Option<Workout>, AppError> {
        let workout = sqlx::query_as::<_, Workout>(
            r#"
            SELECT id, user_id, name, day_of_week
            FROM workouts
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(workout)
    }

    pub async fn delete(db: &SqlitePool, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM workouts WHERE id = ?1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(())
    }
}
