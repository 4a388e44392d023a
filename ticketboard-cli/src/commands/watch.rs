//! Live board

use std::io::Write;

use anyhow::{Context, Result};
use colored::*;
use tracing::info;

use super::build_source;
use crate::config::Config;
use crate::render::{BoardView, render_board};
use crate::scheduler::{BoardState, TicketJobPoller};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Poll until Ctrl-C, redrawing after every published state
pub async fn handle_watch(config: &Config) -> Result<()> {
    let handle = TicketJobPoller::new(build_source(config), config.poll_interval).spawn();
    let mut updates = handle.subscribe();

    draw(config, &handle.current())?;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = std::sync::Arc::clone(&*updates.borrow_and_update());
                draw(config, &state)?;
            }
            _ = &mut ctrl_c => {
                info!("Received Ctrl-C, stopping");
                break;
            }
        }
    }

    handle.shutdown().await;
    Ok(())
}

fn draw(config: &Config, state: &BoardState) -> Result<()> {
    let board = render_board(&BoardView::from_state(state, &config.display_zone));
    let footer = format!(
        "customer {} · every {:?} · Ctrl-C to quit",
        config.customer_id, config.poll_interval
    );

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}{}\n{}", CLEAR_SCREEN, board, footer.dimmed())
        .and_then(|_| stdout.flush())
        .context("Failed to draw board")
}
