use crate::enums::chat_error::ChatError;
use crate::enums::role::Role;
use crate::structs::message::Message;

pub struct ConversationHelper;

impl ConversationHelper {
    /// System message first (omitted when blank), then the user prompt.
    pub fn build(system_prompt: &str, user_prompt: &str) -> Vec<Message> {
        let mut messages = Vec::with_capacity(2);

        if !system_prompt.trim().is_empty() {
            messages.push(Message::system(system_prompt));
        }
        messages.push(Message::user(user_prompt));

        messages
    }

    /// Rejects conversations Ollama would accept but that cannot yield a useful reply.
    pub fn validate(messages: &[Message]) -> Result<(), ChatError> {
        if messages.is_empty() {
            return Err(ChatError::invalid("conversation has no messages"));
        }

        if let Some(index) = messages.iter().position(|m| m.content().trim().is_empty()) {
            return Err(ChatError::invalid(format!(
                "message {index} ({}) has empty content",
                messages[index].role()
            )));
        }

        if !messages.iter().any(|m| m.role() == Role::User) {
            return Err(ChatError::invalid("conversation has no user message"));
        }

        Ok(())
    }
}
