use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Send the configured prompts and print the reply (default)
    Ask {
        #[clap(short, long)]
        model: Option<String>,
        #[clap(short, long)]
        system: Option<String>,
        #[clap(short, long)]
        prompt: Option<String>,
    },
    /// Write a sample configuration file
    Init,
    /// Check the configuration and that the model is available
    Validate,
    /// List models pulled on the Ollama server
    Models,
}

impl Default for Commands {
    fn default() -> Self {
        Self::Ask {
            model: None,
            system: None,
            prompt: None,
        }
    }
}
