use async_trait::async_trait;
use crate::enums::chat_error::ChatError;
use crate::structs::ai::ollama::ollama_model_info::OllamaModelInfo;
use crate::structs::message::Message;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatProvider: Send + Sync {

    /// Sends the conversation in one round-trip and returns the assistant's reply.
    async fn complete(&self, model: &str, messages: &[Message]) -> Result<String, ChatError>;

    async fn list_models(&self) -> Result<Vec<OllamaModelInfo>, ChatError>;
}
