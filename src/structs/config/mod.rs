pub mod chat_config;
pub mod config;
pub mod ollama_config;
