use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Persona instruction prepended to every exchange.
const SYSTEM_PROMPT: &str = "You are a concise, supportive health assistant. \
Encourage healthy habits and answer questions about fitness, nutrition and wellbeing. \
Do not provide medical diagnoses; redirect medical questions to a qualified professional.";

/// External generative text endpoint, one synchronous exchange per call.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send one user message and return the model's reply verbatim.
    async fn reply(&self, user_input: &str) -> anyhow::Result<String>;
}

/// Client for an Ollama-style `/api/chat` endpoint on a locally hosted
/// model. No retry or timeout policy; a failed call is the caller's problem.
pub struct OllamaChat {
    http: reqwest::Client,
    endpoint: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

impl OllamaChat {
    pub fn new(endpoint: &str, model: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl ChatProvider for OllamaChat {
    async fn reply(&self, user_input: &str) -> anyhow::Result<String> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: user_input,
                },
            ],
            stream: false,
        };

        let resp = self
            .http
            .post(format!("{}/api/chat", self.endpoint))
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let parsed: ChatResponse = resp.json().await?;
        Ok(parsed.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_carries_system_then_user_message() {
        let body = ChatRequest {
            model: "llama3",
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: "how much water should I drink?",
                },
            ],
            stream: false,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["stream"], false);
    }

    #[test]
    fn endpoint_trailing_slash_is_normalized() {
        let client = OllamaChat::new("http://localhost:11434/", "llama3");
        assert_eq!(client.endpoint, "http://localhost:11434");
    }
}
