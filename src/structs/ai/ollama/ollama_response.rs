use serde::{Deserialize, Serialize};
use crate::enums::chat_error::ChatError;
use crate::enums::role::Role;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OllamaResponseMessage {
    #[serde(default)]
    pub role: Option<Role>,

    #[serde(default)]
    pub content: Option<String>,
}

/// Non-streaming `/api/chat` reply. Only `message` is required; the rest is timing metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OllamaChatResponse {
    #[serde(default)]
    pub model: Option<String>,

    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub message: Option<OllamaResponseMessage>,

    #[serde(default)]
    pub done: Option<bool>,

    #[serde(default)]
    pub done_reason: Option<String>,

    #[serde(default)]
    pub total_duration: Option<u64>,

    #[serde(default)]
    pub load_duration: Option<u64>,

    #[serde(default)]
    pub prompt_eval_count: Option<u64>,

    #[serde(default)]
    pub eval_count: Option<u64>,

    #[serde(default)]
    pub eval_duration: Option<u64>,
}

impl OllamaChatResponse {
    pub fn log_metadata(&self) {
        log::debug!(
            "📊 model={} done={:?} reason={} prompt_tokens={:?} output_tokens={:?} total={:.2}s",
            self.model.as_deref().unwrap_or("?"),
            self.done,
            self.done_reason.as_deref().unwrap_or("-"),
            self.prompt_eval_count,
            self.eval_count,
            self.total_duration.unwrap_or(0) as f64 / 1e9,
        );
    }

    pub fn into_reply(self) -> Result<String, ChatError> {
        let message = self
            .message
            .ok_or_else(|| ChatError::malformed("response has no `message` field"))?;

        match message.role {
            Some(Role::Assistant) => {}
            Some(other) => {
                return Err(ChatError::malformed(format!("expected an assistant message, got role `{other}`")));
            }
            None => return Err(ChatError::malformed("response message has no `role` field")),
        }

        let content = message
            .content
            .ok_or_else(|| ChatError::malformed("assistant message has no `content` field"))?;

        if content.trim().is_empty() {
            return Err(ChatError::malformed("assistant message is empty"));
        }

        Ok(content)
    }
}
