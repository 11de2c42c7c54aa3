use clap::Parser;
use colored::*;
use std::io;
use std::process;

use masterchef::api::GroqClient;
use masterchef::cli::Args;
use masterchef::config::Config;
use masterchef::error::{MasterChefError, Result};
use masterchef::history::{FileHistoryStore, HistoryStore};
use masterchef::input::decode_prompt;
use masterchef::runner::SessionRunner;
use masterchef::ui::log_verbose;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let config = Config::from_env_and_args(&args);

    // Handle --clear option
    if args.clear_history {
        match FileHistoryStore::new(&config.history_file).clear() {
            Ok(_) => {
                println!("Conversation history cleared.");
                return;
            }
            Err(e) => {
                eprintln!("{}", format!("Error clearing history: {}", e).red());
                process::exit(1);
            }
        }
    }

    if let Err(e) = run(&args, &config).await {
        // Errors go to stdout so a caller relaying stdout sees them
        println!("{}", e.report());
        process::exit(e.exit_code());
    }
}

async fn run(args: &Args, config: &Config) -> Result<()> {
    let encoded = args
        .prompt
        .as_deref()
        .ok_or(MasterChefError::InputMissing)?;
    let prompt = decode_prompt(encoded)?;

    let client = GroqClient::new(config)?;
    log_verbose(
        config.verbose,
        &format!("Using model {} at {}", client.model(), client.endpoint()),
    );

    let store = FileHistoryStore::new(&config.history_file).with_verbose(config.verbose);
    let runner =
        SessionRunner::new(store, client, &config.system_prompt).with_verbose(config.verbose);

    let mut stdout = io::stdout();
    runner.run(&prompt, &mut stdout).await?;
    Ok(())
}
