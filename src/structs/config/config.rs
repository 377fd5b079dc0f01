use serde::{Deserialize, Serialize};
use crate::structs::config::chat_config::ChatConfig;
use crate::structs::config::ollama_config::OllamaConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub ollama: OllamaConfig,

    #[serde(default)]
    pub chat: ChatConfig,
}
