use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "ollama-chat", version)]
#[clap(about = "Ask a local Ollama model a question and print the reply", long_about = None)]
pub struct Cli {
    /// Path to a config file (default: ~/ollama-chat/config.toml)
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Ollama server URL, overrides OLLAMA_HOST and the config file
    #[clap(long, global = true)]
    pub host: Option<String>,

    /// Enable debug logging on stderr
    #[clap(short, long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Option<Commands>,
}
