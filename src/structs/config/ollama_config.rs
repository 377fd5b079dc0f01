use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct OllamaConfig {
    #[serde(default = "ConfigHelper::default_host")]
    pub host: String,

    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            host: ConfigHelper::default_host(),
            timeout_secs: None,
        }
    }
}
