use clap::Parser;
use ollama_chat::errors::ErrorHandler;
use ollama_chat::logger;
use ollama_chat::structs::cli::Cli;
use ollama_chat::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let mut runner = CommandRunner::new();
    if let Err(e) = runner.run_command(cli).await {
        ErrorHandler::handle_error(&e);
        std::process::exit(1);
    }
}
