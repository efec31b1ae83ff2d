use std::sync::Arc;

use anyhow::Context;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::chatbot::{ChatProvider, OllamaChat};
use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
    pub chat: Arc<dyn ChatProvider>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let db = SqlitePoolOptions::new()
            .max_connections(10)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;

        let chat = Arc::new(OllamaChat::new(&config.chat.endpoint, &config.chat.model))
            as Arc<dyn ChatProvider>;

        Ok(Self { db, config, chat })
    }

    pub fn from_parts(db: SqlitePool, config: Arc<AppConfig>, chat: Arc<dyn ChatProvider>) -> Self {
        Self { db, config, chat }
    }
}
