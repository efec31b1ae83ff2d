use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use crate::error::AppError;

/// Habit row, owned by exactly one user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Habit {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub reminder_time: Option<String>,
    pub completed: bool,
}

impl Habit {
    pub async fn create(
        db: &SqlitePool,
        user_id: i64,
        name: &str,
        reminder_time: Option<&str>,
    ) -> Result<Habit, AppError> {
        let habit = sqlx::query_as::<_, Habit>(
            r#"
            INSERT INTO habits (user_id, name, reminder_time)
            VALUES (?1, ?2, ?3)
            RETURNING id, user_id, name, reminder_time, completed
            "#,
        )
        .bind(user_id)
        .bind(name)
        .bind(reminder_time)
        .fetch_one(db)
        .await?;
        Ok(habit)
    }

    pub async fn list_for_user(db: &SqlitePool, user_id: i64) -> Result<Vec<Habit>, AppError> {
        let rows = sqlx::query_as::<_, Habit>(
            r#"
            SELECT id, user_id, name, reminder_time, completed
            FROM habits
            WHERE user_id = ?1
            ORDER BY id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn find_by_id(db: &SqlitePool, id: i64) -> Result<Option<Habit>, AppError> {
        let habit = sqlx::query_as::<_, Habit>(
            r#"
            SELECT id, user_id, name, reminder_time, completed
            FROM habits
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(habit)
    }

    pub async fn delete(db: &SqlitePool, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM habits WHERE id = ?1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(())
    }

    /// Idempotent: marking an already-completed habit is a no-op.
    pub async fn mark_completed(db: &SqlitePool, id: i64) -> Result<(), AppError> {
        sqlx::query("UPDATE habits SET completed = TRUE WHERE id = ?1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(())
    }
}
