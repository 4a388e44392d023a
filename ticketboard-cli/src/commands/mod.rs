//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod show;
mod watch;

use std::sync::Arc;

use anyhow::Result;
use clap::Subcommand;
use ticketboard_client::{CustomerTicketJobs, TicketJobClient, TicketJobSource};

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Poll continuously and redraw the board on every update
    Watch,
    /// Poll once, print the board and exit
    Show {
        /// Print the fetched ticket jobs as JSON instead of the board
        #[arg(long)]
        json: bool,
    },
}

/// Handle a CLI command
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The validated dashboard configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Watch => watch::handle_watch(config).await,
        Commands::Show { json } => show::handle_show(config, json).await,
    }
}

/// Ticket job source for the configured customer
fn build_source(config: &Config) -> Arc<dyn TicketJobSource> {
    let client = TicketJobClient::new(config.endpoint_url.clone());
    Arc::new(CustomerTicketJobs::new(client, config.customer_id.clone()))
}
