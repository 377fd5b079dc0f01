use serde::{Deserialize, Serialize};
use crate::structs::ai::ollama::ollama_options::OllamaOptions;
use crate::structs::message::Message;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaChatRequest {
    pub model: String,

    pub messages: Vec<Message>,

    pub stream: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<OllamaOptions>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_alive: Option<String>,
}
