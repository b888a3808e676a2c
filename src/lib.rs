pub mod app;
pub mod config;
pub mod dictionary;
pub mod errors;
pub mod header;
pub mod llm_client;
pub mod logger;
pub mod prompt;
