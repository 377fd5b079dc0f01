use thiserror::Error;

/// Failure of a single chat round-trip against the inference endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error("Connection Error: could not reach {url}: {reason}")]
    Connection { url: String, reason: String },

    #[error("Model Not Found: '{model}' is not available on {host}")]
    ModelNotFound { model: String, host: String },

    #[error("Malformed Response: {0}")]
    MalformedResponse(String),

    #[error("Ollama API Error: HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Invalid Request: {0}")]
    InvalidRequest(String),
}

impl ChatError {
    pub fn connection(url: &str, error: &reqwest::Error) -> Self {
        Self::Connection {
            url: url.to_string(),
            reason: error.to_string(),
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse(reason.into())
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidRequest(reason.into())
    }
}
