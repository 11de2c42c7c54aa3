use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "masterchef")]
#[command(about = "MasterChef recipe assistant backed by the Groq chat-completions API", long_about = None)]
pub struct Args {
    #[arg(short = 'v', long = "verbose", help = "Print diagnostics to stderr")]
    pub verbose: bool,

    #[arg(long = "clear", help = "Clear the conversation history")]
    pub clear_history: bool,

    #[arg(long = "history-file", help = "Path of the conversation history file")]
    pub history_file: Option<PathBuf>,

    #[arg(long = "model", help = "Model to use for completions")]
    pub model: Option<String>,

    #[arg(
        long = "api-endpoint",
        help = "Custom API base URL (e.g., http://localhost:11434/v1)"
    )]
    pub api_endpoint: Option<String>,

    #[arg(help = "Base64-encoded prompt to send to the assistant")]
    pub prompt: Option<String>,
}
