use std::time::Duration;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use crate::config::constants::{timeout_duration, CHAT_ENDPOINT, TAGS_ENDPOINT};
use crate::enums::chat_error::ChatError;
use crate::errors::{AppError, AppResult};
use crate::helpers::config_helper::ConfigHelper;
use crate::helpers::conversation_helper::ConversationHelper;
use crate::structs::ai::ollama::ollama_error::OllamaError;
use crate::structs::ai::ollama::ollama_model_info::{OllamaModelInfo, OllamaTagsResponse};
use crate::structs::ai::ollama::ollama_options::OllamaOptions;
use crate::structs::ai::ollama::ollama_request::OllamaChatRequest;
use crate::structs::ai::ollama::ollama_response::OllamaChatResponse;
use crate::structs::config::config::Config;
use crate::structs::message::Message;
use crate::traits::chat_provider::ChatProvider;

#[derive(Clone)]
pub struct OllamaProvider {
    base_url: String,
    client: Client,
    options: OllamaOptions,
    keep_alive: Option<String>,
}

impl OllamaProvider {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: ConfigHelper::normalize_host(base_url),
            client: Client::new(),
            options: OllamaOptions::default(),
            keep_alive: None,
        }
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        let mut provider = Self::new(&config.ollama.host)
            .with_temperature(config.chat.temperature)
            .with_keep_alive(config.chat.keep_alive.clone());

        if let Some(seconds) = config.ollama.timeout_secs {
            provider = provider
                .with_timeout(timeout_duration(seconds))
                .map_err(|e| AppError::http_client_error(&e.to_string()))?;
        }

        Ok(provider)
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.options.temperature = temperature;
        self
    }

    pub fn with_keep_alive(mut self, keep_alive: Option<String>) -> Self {
        self.keep_alive = keep_alive;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, reqwest::Error> {
        self.client = Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_request(&self, model: &str, messages: &[Message]) -> OllamaChatRequest {
        OllamaChatRequest {
            model: model.to_string(),
            messages: messages.to_vec(),
            stream: false,
            options: if self.options.is_empty() { None } else { Some(self.options.clone()) },
            keep_alive: self.keep_alive.clone(),
        }
    }

    /// Maps a non-2xx reply. `model` is set only for chat calls, where 404 means the model is missing.
    fn status_error(&self, status: StatusCode, body: &str, model: Option<&str>) -> ChatError {
        let message = OllamaError::message_from_body(body);
        log::debug!("Ollama answered HTTP {status}: {message}");

        match (status, model) {
            (StatusCode::NOT_FOUND, Some(model)) => ChatError::ModelNotFound {
                model: model.to_string(),
                host: self.base_url.clone(),
            },
            _ => ChatError::Api {
                status: status.as_u16(),
                message,
            },
        }
    }

    async fn read_body(&self, url: &str, response: reqwest::Response) -> Result<(StatusCode, String), ChatError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ChatError::connection(url, &e))?;
        Ok((status, body))
    }
}

#[async_trait]
impl ChatProvider for OllamaProvider {

    async fn complete(&self, model: &str, messages: &[Message]) -> Result<String, ChatError> {
        if model.trim().is_empty() {
            return Err(ChatError::invalid("model name is empty"));
        }
        ConversationHelper::validate(messages)?;

        let url = format!("{}{}", self.base_url, CHAT_ENDPOINT);
        let request_body = self.get_request(model, messages);

        log::info!("📦 Request model: {model} ({} messages)", request_body.messages.len());

        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ChatError::connection(&url, &e))?;

        let (status, body) = self.read_body(&url, response).await?;
        if !status.is_success() {
            return Err(self.status_error(status, &body, Some(model)));
        }

        let chat_response: OllamaChatResponse = serde_json::from_str(&body)
            .map_err(|e| ChatError::malformed(format!("invalid chat response body: {e}")))?;
        chat_response.log_metadata();

        chat_response.into_reply()
    }

    async fn list_models(&self) -> Result<Vec<OllamaModelInfo>, ChatError> {
        let url = format!("{}{}", self.base_url, TAGS_ENDPOINT);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ChatError::connection(&url, &e))?;

        let (status, body) = self.read_body(&url, response).await?;
        if !status.is_success() {
            return Err(self.status_error(status, &body, None));
        }

        let tags: OllamaTagsResponse = serde_json::from_str(&body)
            .map_err(|e| ChatError::malformed(format!("invalid model list body: {e}")))?;

        Ok(tags.models)
    }
}
