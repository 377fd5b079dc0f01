use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OllamaModelInfo {
    pub name: String,

    #[serde(default)]
    pub size: Option<u64>,

    #[serde(default)]
    pub modified_at: Option<String>,
}

impl OllamaModelInfo {
    /// Ollama reports untagged models as `name:latest`.
    pub fn matches(&self, model: &str) -> bool {
        self.name == model || self.name.strip_suffix(":latest") == Some(model)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OllamaTagsResponse {
    #[serde(default)]
    pub models: Vec<OllamaModelInfo>,
}
