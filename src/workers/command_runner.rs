use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::chat_error::ChatError;
use crate::enums::commands::Commands;
use crate::errors::{AppError, AppResult};
use crate::helpers::conversation_helper::ConversationHelper;
use crate::services::ai_providers::ollama::OllamaProvider;
use crate::structs::cli::Cli;
use crate::structs::config::chat_config::ChatConfig;
use crate::structs::config::config::Config;
use crate::traits::chat_provider::ChatProvider;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, cli: Cli) -> AppResult<()> {
        self.start_time = Some(Instant::now());

        let result = match cli.command.clone().unwrap_or_default() {
            Commands::Ask { model, system, prompt } => self.ask_command(&cli, model, system, prompt).await,
            Commands::Init => self.init_command(cli.config.as_deref()),
            Commands::Validate => self.validate_command(&cli).await,
            Commands::Models => self.models_command(&cli).await,
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::debug!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn load_config(cli: &Cli) -> AppResult<Config> {
        let mut config = ConfigManager::load(cli.config.as_deref())?;
        ConfigManager::apply_host_override(&mut config, cli.host.as_deref());
        Ok(config)
    }

    fn validate(config: &Config) -> AppResult<()> {
        ConfigManager::validate_config(config).map_err(|errors| AppError::Validation { errors })
    }

    async fn ask_command(
        &self,
        cli: &Cli,
        model: Option<String>,
        system: Option<String>,
        prompt: Option<String>,
    ) -> AppResult<()> {
        let mut config = Self::load_config(cli)?;

        if let Some(model) = model {
            config.chat.model = model;
        }
        if let Some(system) = system {
            config.chat.system_prompt = system;
        }
        if let Some(prompt) = prompt {
            config.chat.user_prompt = prompt;
        }
        Self::validate(&config)?;

        log::debug!("🌐 Ollama host: {}", config.ollama.host);
        let provider = OllamaProvider::from_config(&config)?;

        Self::ask(&provider, &config.chat, &mut io::stdout()).await
    }

    /// Writes the reply to `out` only after the whole round-trip succeeded.
    pub async fn ask<P, W>(provider: &P, chat: &ChatConfig, out: &mut W) -> AppResult<()>
    where
        P: ChatProvider + ?Sized,
        W: Write,
    {
        let messages = ConversationHelper::build(&chat.system_prompt, &chat.user_prompt);
        let reply = provider.complete(&chat.model, &messages).await?;

        writeln!(out, "{reply}")?;
        out.flush()?;
        Ok(())
    }

    fn init_command(&self, path: Option<&Path>) -> AppResult<()> {
        let config_file_path = ConfigManager::create_sample_config(path)?;

        println!("✅ Created sample config at: {}", config_file_path.display());
        println!("🔧 Run 'ollama-chat validate' to check it against your Ollama server.");
        Ok(())
    }

    async fn validate_command(&self, cli: &Cli) -> AppResult<()> {
        let config = Self::load_config(cli)?;
        let provider = OllamaProvider::from_config(&config)?;

        Self::validate_against(&provider, &config, &mut io::stdout()).await
    }

    /// Reports to `out` only once both the config and the model check have passed.
    pub async fn validate_against<P, W>(provider: &P, config: &Config, out: &mut W) -> AppResult<()>
    where
        P: ChatProvider + ?Sized,
        W: Write,
    {
        Self::validate(config)?;
        log::info!("Configuration is valid, checking {}", config.ollama.host);

        Self::check_model(provider, &config.chat.model, &config.ollama.host).await?;

        writeln!(out, "✅ Configuration is valid")?;
        writeln!(out, "✅ Model '{}' is available on {}", config.chat.model, config.ollama.host)?;
        out.flush()?;
        Ok(())
    }

    pub async fn check_model<P>(provider: &P, model: &str, host: &str) -> AppResult<()>
    where
        P: ChatProvider + ?Sized,
    {
        let models = provider.list_models().await?;

        if models.iter().any(|m| m.matches(model)) {
            Ok(())
        } else {
            Err(ChatError::ModelNotFound {
                model: model.to_string(),
                host: host.to_string(),
            }
            .into())
        }
    }

    async fn models_command(&self, cli: &Cli) -> AppResult<()> {
        let config = Self::load_config(cli)?;
        let provider = OllamaProvider::from_config(&config)?;

        Self::print_models(&provider, &mut io::stdout()).await
    }

    pub async fn print_models<P, W>(provider: &P, out: &mut W) -> AppResult<()>
    where
        P: ChatProvider + ?Sized,
        W: Write,
    {
        let models = provider.list_models().await?;
        if models.is_empty() {
            log::warn!("No models pulled yet. Try 'ollama pull <model>'.");
        }

        for model in models {
            writeln!(out, "{}", model.name)?;
        }
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::role::Role;
    use crate::structs::ai::ollama::ollama_model_info::OllamaModelInfo;
    use crate::traits::chat_provider::MockChatProvider;

    fn model(name: &str) -> OllamaModelInfo {
        OllamaModelInfo { name: name.to_string(), size: None, modified_at: None }
    }

    #[tokio::test]
    async fn ask_prints_reply_for_default_prompts() {
        let mut provider = MockChatProvider::new();
        provider.expect_complete().times(1).returning(|model, messages| {
            assert_eq!(model, "gemma3:4b");
            assert_eq!(messages.len(), 2);
            assert_eq!(messages[0].role(), Role::System);
            assert_eq!(messages[1].content(), "Kenapa langit berwarna biru?");
            Ok("Langit berwarna biru karena hamburan Rayleigh.".to_string())
        });

        let mut out = Vec::new();
        CommandRunner::ask(&provider, &ChatConfig::default(), &mut out).await.unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Langit berwarna biru karena hamburan Rayleigh.\n");
    }

    #[tokio::test]
    async fn ask_prints_nothing_on_failure() {
        let mut provider = MockChatProvider::new();
        provider.expect_complete().times(1).returning(|_, _| {
            Err(ChatError::Connection {
                url: "http://127.0.0.1:11434/api/chat".to_string(),
                reason: "connection refused".to_string(),
            })
        });

        let mut out = Vec::new();
        let err = CommandRunner::ask(&provider, &ChatConfig::default(), &mut out).await.unwrap_err();

        assert!(matches!(err, AppError::Chat(ChatError::Connection { .. })));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn check_model_accepts_latest_tag() {
        let mut provider = MockChatProvider::new();
        provider
            .expect_list_models()
            .times(2)
            .returning(|| Ok(vec![model("gemma3:4b"), model("llama2:latest")]));

        assert!(CommandRunner::check_model(&provider, "llama2", "http://h:11434").await.is_ok());

        let err = CommandRunner::check_model(&provider, "mistral", "http://h:11434").await.unwrap_err();
        assert!(matches!(err, AppError::Chat(ChatError::ModelNotFound { ref model, .. }) if model == "mistral"));
    }

    #[tokio::test]
    async fn validate_reports_after_model_check() {
        let mut provider = MockChatProvider::new();
        provider.expect_list_models().times(1).returning(|| Ok(vec![model("gemma3:4b")]));

        let mut out = Vec::new();
        CommandRunner::validate_against(&provider, &Config::default(), &mut out).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "✅ Configuration is valid\n✅ Model 'gemma3:4b' is available on http://127.0.0.1:11434\n"
        );
    }

    #[tokio::test]
    async fn validate_prints_nothing_when_model_missing() {
        let mut provider = MockChatProvider::new();
        provider.expect_list_models().times(1).returning(|| Ok(vec![model("llama3.2:latest")]));

        let mut out = Vec::new();
        let err = CommandRunner::validate_against(&provider, &Config::default(), &mut out).await.unwrap_err();

        assert!(matches!(err, AppError::Chat(ChatError::ModelNotFound { .. })));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn print_models_one_per_line() {
        let mut provider = MockChatProvider::new();
        provider
            .expect_list_models()
            .returning(|| Ok(vec![model("gemma3:4b"), model("llama3.2:latest")]));

        let mut out = Vec::new();
        CommandRunner::print_models(&provider, &mut out).await.unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "gemma3:4b\nllama3.2:latest\n");
    }
}
