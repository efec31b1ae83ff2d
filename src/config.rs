use serde::Deserialize;

/// Settings for the external chat model endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    pub endpoint: String,
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub chat: ChatConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://vitalog.db?mode=rwc".into());
        let chat = ChatConfig {
            endpoint: std::env::var("CHAT_URL")
                .unwrap_or_else(|_| "http://localhost:11434".into()),
            model: std::env::var("CHAT_MODEL").unwrap_or_else(|_| "llama3".into()),
        };
        Ok(Self { database_url, chat })
    }
}
