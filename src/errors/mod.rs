use thiserror::Error;
use crate::config::constants::OLLAMA_HOST_ENV;
use crate::enums::chat_error::ChatError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration Error: {message}")]
    Config {
        message: String,
        suggestion: Option<String>,
    },

    #[error("Configuration file error at '{path}': {reason}")]
    ConfigFile {
        path: String,
        reason: String,
    },

    #[error("Invalid configuration: {}", .errors.join("; "))]
    Validation {
        errors: Vec<String>,
    },

    #[error(transparent)]
    Chat(#[from] ChatError),

    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn config_error(message: &str, suggestion: Option<&str>) -> Self {
        Self::Config {
            message: message.to_string(),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn config_file_error(path: &str, reason: &str) -> Self {
        Self::ConfigFile {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn http_client_error(reason: &str) -> Self {
        Self::config_error(
            &format!("Failed to build the HTTP client: {reason}"),
            Some("Check ollama.timeout_secs and the system TLS setup"),
        )
    }

    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Config { suggestion, .. } => suggestion.clone(),
            Self::ConfigFile { .. } => Some("Check file permissions and TOML syntax".to_string()),
            Self::Validation { .. } => Some("Fix the listed fields and run 'ollama-chat validate'".to_string()),
            Self::Chat(ChatError::Connection { .. }) => Some(format!(
                "Is Ollama running? Start it with 'ollama serve' or point {OLLAMA_HOST_ENV} / --host at the server"
            )),
            Self::Chat(ChatError::ModelNotFound { model, .. }) => Some(format!("Pull it first: 'ollama pull {model}'")),
            Self::Chat(ChatError::MalformedResponse(_)) => {
                Some("Make sure the host points at an Ollama server".to_string())
            }
            Self::Chat(ChatError::InvalidRequest(_)) => Some("Check the prompts in your configuration".to_string()),
            Self::Chat(ChatError::Api { .. }) | Self::Io(_) => None,
        }
    }

    pub fn user_message(&self) -> String {
        let mut msg = match self {
            Self::Validation { errors } => {
                let mut msg = String::from("Invalid configuration:");
                for error in errors {
                    msg.push_str(&format!("\n  - {error}"));
                }
                msg
            }
            other => other.to_string(),
        };

        if let Some(suggestion) = self.suggestion() {
            msg.push_str(&format!("\n💡 {suggestion}"));
        }
        msg
    }
}

pub type AppResult<T> = Result<T, AppError>;

pub struct ErrorHandler;

impl ErrorHandler {
    pub fn handle_error(error: &AppError) {
        log::debug!("{error:?}");
        eprintln!("❌ {}", error.user_message());
    }
}
