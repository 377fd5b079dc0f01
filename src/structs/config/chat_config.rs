use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChatConfig {
    #[serde(default = "ConfigHelper::default_model")]
    pub model: String,

    #[serde(default = "ConfigHelper::default_system_prompt")]
    pub system_prompt: String,

    #[serde(default = "ConfigHelper::default_user_prompt")]
    pub user_prompt: String,

    #[serde(default)]
    pub temperature: Option<f32>,

    #[serde(default)]
    pub keep_alive: Option<String>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            model: ConfigHelper::default_model(),
            system_prompt: ConfigHelper::default_system_prompt(),
            user_prompt: ConfigHelper::default_user_prompt(),
            temperature: None,
            keep_alive: None,
        }
    }
}
