use crate::state::AppState;
use axum::Router;

pub mod client;
mod dto;
pub mod handlers;

pub use client::{ChatProvider, OllamaChat};

pub fn router() -> Router<AppState> {
    handlers::routes()
}
