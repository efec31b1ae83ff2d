use serde::{Deserialize, Serialize};

/// Form body for a chatbot exchange.
#[derive(Debug, Deserialize)]
pub struct ChatForm {
    pub user_input: String,
}

/// The model's reply, verbatim. Empty when the model is unavailable.
#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
}
