pub mod ollama_error;
pub mod ollama_model_info;
pub mod ollama_options;
pub mod ollama_request;
pub mod ollama_response;
