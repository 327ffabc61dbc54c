use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use business_advisor::config::Config;
use business_advisor::console::{Console, Outcome};
use business_advisor::dispatcher::Dispatcher;
use business_advisor::server::{self, AppState};

#[derive(Debug, Parser)]
#[command(name = "business-advisor", about = "Consult a crew of LLM business advisors")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP API (default)
    Serve,
    /// Send one challenge to the advisors and print their answers
    Ask {
        /// The business challenge text
        challenge: String,
    },
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<ExitCode> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    // logging
    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter_layer).init();

    tracing::info!("Starting Business Advisor");

    let config = Config::load().context("failed to load configuration")?;
    let dispatcher = Dispatcher::from_config(&config)?;

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let addr = config.listen_addr();
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("failed to bind {}", addr))?;
            server::serve(listener, Arc::new(AppState { dispatcher })).await?;
        }
        Command::Ask { challenge } => {
            let console = Console::new(dispatcher);
            // errors were already shown with tips; only the exit status is left
            return Ok(match console.run(&challenge).await {
                Outcome::Completed(_) => ExitCode::SUCCESS,
                Outcome::Cancelled => ExitCode::from(130),
                Outcome::Failed => ExitCode::FAILURE,
            });
        }
    }

    Ok(ExitCode::SUCCESS)
}
