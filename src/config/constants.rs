use std::time::Duration;

pub const DEFAULT_LOOPBACK: &str = "127.0.0.1";
pub const DEFAULT_OLLAMA_PORT: u16 = 11434;
pub const DEFAULT_OLLAMA_HOST: &str = "http://127.0.0.1:11434";
pub const OLLAMA_HOST_ENV: &str = "OLLAMA_HOST";

pub const CHAT_ENDPOINT: &str = "/api/chat";
pub const TAGS_ENDPOINT: &str = "/api/tags";

pub const CONFIG_DIR_NAME: &str = "ollama-chat";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_MODEL: &str = "gemma3:4b";
pub const DEFAULT_SYSTEM_PROMPT: &str = "You're helpful assistant. Answer with user's native language.";
pub const DEFAULT_USER_PROMPT: &str = "Kenapa langit berwarna biru?";

pub const MIN_TEMPERATURE: f32 = 0.0;
pub const MAX_TEMPERATURE: f32 = 2.0;

pub fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
