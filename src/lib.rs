pub mod api;
pub mod config;
pub mod fetch_worker;
pub mod glossary;
pub mod logger;
pub mod models;
pub mod quiz;
pub mod ui;
pub mod utils;

#[cfg(test)]
mod state_tests;

// Re-exports for convenience
pub use api::{ApiError, Client};
pub use config::{Config, ConfigError};
pub use fetch_worker::spawn_fetch_worker;
pub use glossary::{group_terms_by_category, handle_glossary_input};
pub use models::{
    Category, FetchRequest, FetchResponse, GlossaryState, GlossaryTerm, Language, QuizQuestion,
    QuizState, View,
};
pub use quiz::{handle_quiz_input, shuffled_questions};
pub use ui::{draw_glossary, draw_header, draw_help, draw_loading, draw_quiz};
pub use utils::truncate_string;
