//! Arium-testgen is a small web backend that turns free-text scenario
//! descriptions plus an uploaded Unity scene file into Arium-framework test
//! code, by relaying both through a chat-completion API.
pub mod classifier;
pub mod config;
pub mod generator;
pub mod llm;
pub mod prompts;
pub mod server;

// Re-export commonly used types
pub use classifier::RelevanceClassifier;
pub use generator::TestGenerator;
pub use server::{create_router, run_server, state::AppState};
