use crate::config::constants::{
    DEFAULT_LOOPBACK, DEFAULT_MODEL, DEFAULT_OLLAMA_HOST, DEFAULT_OLLAMA_PORT, DEFAULT_SYSTEM_PROMPT, DEFAULT_USER_PROMPT,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_host() -> String {
        DEFAULT_OLLAMA_HOST.to_string()
    }

    pub fn default_model() -> String {
        DEFAULT_MODEL.to_string()
    }

    pub fn default_system_prompt() -> String {
        DEFAULT_SYSTEM_PROMPT.to_string()
    }

    pub fn default_user_prompt() -> String {
        DEFAULT_USER_PROMPT.to_string()
    }

    /// Accepts `host`, `host:port`, `:port` or a full URL, the forms `OLLAMA_HOST` takes.
    /// Without a scheme, `http://` and the default Ollama port are filled in.
    pub fn normalize_host(raw: &str) -> String {
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::default_host();
        }

        if trimmed.contains("://") {
            return trimmed.to_string();
        }

        let (authority, path) = match trimmed.find('/') {
            Some(index) => trimmed.split_at(index),
            None => (trimmed, ""),
        };

        // ":11434" names only a port, the host is the loopback address.
        let authority = if authority.starts_with(':') {
            format!("{DEFAULT_LOOPBACK}{authority}")
        } else {
            authority.to_string()
        };

        if Self::has_port(&authority) {
            format!("http://{authority}{path}")
        } else {
            format!("http://{authority}:{DEFAULT_OLLAMA_PORT}{path}")
        }
    }

    fn has_port(authority: &str) -> bool {
        authority
            .rsplit_once(':')
            .is_some_and(|(host, port)| !host.is_empty() && port.parse::<u16>().is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_scheme_and_port() {
        assert_eq!(ConfigHelper::normalize_host("localhost"), "http://localhost:11434");
        assert_eq!(ConfigHelper::normalize_host("10.0.0.5:8080"), "http://10.0.0.5:8080");
        assert_eq!(ConfigHelper::normalize_host("[::1]"), "http://[::1]:11434");
        assert_eq!(ConfigHelper::normalize_host("[::1]:9000"), "http://[::1]:9000");
    }

    #[test]
    fn port_only_means_loopback() {
        assert_eq!(ConfigHelper::normalize_host(":11434"), "http://127.0.0.1:11434");
        assert_eq!(ConfigHelper::normalize_host(":8080/"), "http://127.0.0.1:8080");
    }

    #[test]
    fn keeps_explicit_urls() {
        assert_eq!(ConfigHelper::normalize_host("https://ollama.internal/"), "https://ollama.internal");
        assert_eq!(ConfigHelper::normalize_host(" http://127.0.0.1:11434 "), "http://127.0.0.1:11434");
    }

    #[test]
    fn keeps_path_prefix() {
        assert_eq!(ConfigHelper::normalize_host("gateway:8000/ollama/"), "http://gateway:8000/ollama");
    }

    #[test]
    fn blank_falls_back_to_default() {
        assert_eq!(ConfigHelper::normalize_host("   "), DEFAULT_OLLAMA_HOST);
    }
}
