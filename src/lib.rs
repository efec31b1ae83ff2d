pub mod app;
pub mod auth;
pub mod calories;
pub mod chatbot;
pub mod config;
pub mod error;
pub mod habits;
pub mod state;
pub mod workouts;
