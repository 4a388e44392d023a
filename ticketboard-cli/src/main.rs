//! Ticketboard CLI
//!
//! Terminal dashboard for ticket jobs of one customer.
//!
//! Architecture:
//! - Configuration: command-line flags, each backed by an environment variable
//! - Scheduler: fixed-interval polling that publishes the latest board state
//! - Render: pure mapping from board state to a view tree and terminal text

mod commands;
mod config;
mod render;
mod scheduler;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::{Config, DEFAULT_CUSTOMER_ID, DEFAULT_ENDPOINT_URL, DEFAULT_POLL_INTERVAL_MS};
use render::DisplayZone;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ticketboard")]
#[command(about = "Ticket job status dashboard", long_about = None)]
struct Cli {
    /// Base URL of the ticket-jobs backend
    #[arg(long, env = "TICKETBOARD_ENDPOINT_URL", default_value = DEFAULT_ENDPOINT_URL)]
    endpoint_url: String,

    /// Customer whose ticket jobs are shown
    #[arg(long, env = "TICKETBOARD_CUSTOMER_ID", default_value = DEFAULT_CUSTOMER_ID)]
    customer_id: String,

    /// Poll interval in milliseconds
    #[arg(long, env = "TICKETBOARD_POLL_INTERVAL_MS", default_value_t = DEFAULT_POLL_INTERVAL_MS)]
    poll_interval_ms: u64,

    /// Zone for displayed timestamps: `local`, `utc` or an offset like `+01:00`
    #[arg(long, env = "TICKETBOARD_UTC_OFFSET", default_value = "local")]
    utc_offset: DisplayZone,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the board on stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ticketboard_cli=info,ticketboard_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config::new(cli.endpoint_url, cli.customer_id)
        .with_poll_interval_ms(cli.poll_interval_ms)
        .with_display_zone(cli.utc_offset);
    config.validate()?;

    debug!(
        "Loaded configuration: endpoint_url={}, customer_id={}, zone={}",
        config.endpoint_url, config.customer_id, config.display_zone
    );

    handle_command(cli.command, &config).await
}
