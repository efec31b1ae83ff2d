use axum::{extract::State, routing::post, Form, Json, Router};
use tracing::{error, instrument};

use crate::{
    chatbot::dto::{ChatForm, ChatReply},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    // No session guard on this route; it mirrors the rest of the app's
    // surface but is reachable without logging in.
    Router::new().route("/chatbot", post(chatbot))
}

#[instrument(skip(state, form))]
pub async fn chatbot(State(state): State<AppState>, Form(form): Form<ChatForm>) -> Json<ChatReply> {
    match state.chat.reply(&form.user_input).await {
        Ok(reply) => Json(ChatReply { reply }),
        Err(e) => {
            // Model unavailable: an empty reply, never a 500.
            error!(error = %e, "chat provider unavailable");
            Json(ChatReply {
                reply: String::new(),
            })
        }
    }
}
