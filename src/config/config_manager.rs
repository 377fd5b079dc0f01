use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, MAX_TEMPERATURE, MIN_TEMPERATURE, OLLAMA_HOST_ENV};
use crate::errors::{AppError, AppResult};
use crate::helpers::config_helper::ConfigHelper;
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# ollama-chat configuration

[ollama]
# Ollama server. OLLAMA_HOST and --host take precedence over this value.
host = "http://127.0.0.1:11434"

# Request timeout in seconds. Leave unset to wait as long as the model needs.
# timeout_secs = 300

[chat]
# Any model listed by 'ollama list'
model = "gemma3:4b"

# Sent as the first message. Leave empty to send no system message.
system_prompt = "You're helpful assistant. Answer with user's native language."

user_prompt = "Kenapa langit berwarna biru?"

# Sampling temperature passed to Ollama as options.temperature (0.0 - 2.0)
# temperature = 0.7

# How long Ollama keeps the model loaded after the request, e.g. "5m" or "0"
# keep_alive = "5m"
"#;

pub struct ConfigManager;

impl ConfigManager {
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads the explicit file, or the default file when it exists, or built-in defaults,
    /// then applies `OLLAMA_HOST`.
    pub fn load(explicit_path: Option<&Path>) -> AppResult<Config> {
        let mut config = match explicit_path {
            Some(path) => Self::load_from(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::load_from(&path)?,
                _ => {
                    log::debug!("📋 No config file found, using built-in defaults");
                    Config::default()
                }
            },
        };

        Self::apply_env_host(&mut config, std::env::var(OLLAMA_HOST_ENV).ok());
        Ok(config)
    }

    pub fn load_from(path: &Path) -> AppResult<Config> {
        log::debug!("📋 Loading config from: {}", path.display());

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::config_file_error(&path.display().to_string(), &e.to_string()))?;
        let mut config: Config = toml::from_str(&content)
            .map_err(|e| AppError::config_file_error(&path.display().to_string(), e.message()))?;

        config.ollama.host = ConfigHelper::normalize_host(&config.ollama.host);
        Ok(config)
    }

    pub fn apply_env_host(config: &mut Config, env_host: Option<String>) {
        if let Some(host) = env_host.filter(|h| !h.trim().is_empty()) {
            log::debug!("🌐 Using {OLLAMA_HOST_ENV}={host}");
            config.ollama.host = ConfigHelper::normalize_host(&host);
        }
    }

    pub fn apply_host_override(config: &mut Config, host: Option<&str>) {
        if let Some(host) = host {
            config.ollama.host = ConfigHelper::normalize_host(host);
        }
    }

    pub fn create_sample_config(path: Option<&Path>) -> AppResult<PathBuf> {
        let config_file_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_config_path().ok_or_else(|| {
                AppError::config_error(
                    "Could not determine the home directory",
                    Some("Pass an explicit path with --config"),
                )
            })?,
        };

        if config_file_path.exists() {
            return Err(AppError::config_error(
                &format!("Config file already exists: {}", config_file_path.display()),
                Some("Edit the existing file or remove it first"),
            ));
        }

        if let Some(parent) = config_file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_file_path, SAMPLE_CONFIG)?;

        Ok(config_file_path)
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.chat.model.trim().is_empty() {
            errors.push("chat.model must not be empty".to_string());
        }

        if config.chat.user_prompt.trim().is_empty() {
            errors.push("chat.user_prompt must not be empty".to_string());
        }

        let host = &config.ollama.host;
        if !(host.starts_with("http://") || host.starts_with("https://")) {
            errors.push(format!("ollama.host must be an http:// or https:// URL, got '{host}'"));
        }

        if config.ollama.timeout_secs == Some(0) {
            errors.push("ollama.timeout_secs must be greater than 0".to_string());
        }

        if let Some(temperature) = config.chat.temperature {
            if !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&temperature) {
                errors.push(format!(
                    "chat.temperature must be between {MIN_TEMPERATURE} and {MAX_TEMPERATURE}, got {temperature}"
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
