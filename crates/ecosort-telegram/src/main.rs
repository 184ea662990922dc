//! Ecosort Telegram bot binary.
//!
//! Start the bot with:
//! ```bash
//! BOT_TOKEN=xxx LLM_API_KEY=yyy cargo run -p ecosort-telegram
//! ```

use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ecosort_telegram::{BotState, EcosortBot};

/// Telegram bot answering waste-sorting questions via an LLM
#[derive(Parser, Debug)]
#[command(name = "ecosort-telegram")]
struct Args {
    /// Verbose logging (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_filter(verbosity: u8) -> EnvFilter {
    let directives = match verbosity {
        0 => "ecosort_telegram=info,ecosort_agent=info,ecosort_persistence=info,teloxide=warn",
        1 => "ecosort_telegram=debug,ecosort_agent=debug,ecosort_persistence=debug,teloxide=info",
        2 => "ecosort_telegram=trace,ecosort_agent=trace,ecosort_persistence=trace,teloxide=debug",
        _ => "trace",
    };
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("info"))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(args.verbose))
        .init();

    let state = Arc::new(BotState::from_env()?);
    let bot = EcosortBot::new(state)?;

    let username = bot.get_me().await.inspect_err(|e| {
        error!(error = %e, "Token check failed");
    })?;
    info!(username = %username, "Bot initialized");
    println!("Ecosort bot: @{username}");
    println!("Open Telegram and send /start to begin. Press Ctrl+C to stop.");

    bot.start_polling().await?;

    Ok(())
}
