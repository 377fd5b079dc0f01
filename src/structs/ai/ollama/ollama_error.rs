use serde::Deserialize;

/// Error body Ollama sends with non-2xx statuses.
#[derive(Deserialize, Debug, Clone)]
pub struct OllamaError {
    pub error: String,
}

impl OllamaError {
    /// The `error` field when the body is Ollama's JSON error, the trimmed body otherwise.
    pub fn message_from_body(body: &str) -> String {
        match serde_json::from_str::<OllamaError>(body) {
            Ok(parsed) => parsed.error,
            Err(_) if body.trim().is_empty() => "empty response body".to_string(),
            Err(_) => body.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_error_field() {
        let body = r#"{"error":"model \"nope\" not found, try pulling it first"}"#;
        assert_eq!(OllamaError::message_from_body(body), "model \"nope\" not found, try pulling it first");
    }

    #[test]
    fn falls_back_to_raw_body() {
        assert_eq!(OllamaError::message_from_body("  Bad Gateway\n"), "Bad Gateway");
        assert_eq!(OllamaError::message_from_body(""), "empty response body");
    }
}
