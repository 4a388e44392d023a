//! One-shot board output

use anyhow::{Context, Result};

use super::build_source;
use crate::config::Config;
use crate::render::{BoardView, render_board};
use crate::scheduler::{BoardState, NO_TICKET_JOBS_MESSAGE, fetch_outcome};

/// Poll once and print the result
pub async fn handle_show(config: &Config, json: bool) -> Result<()> {
    let source = build_source(config);

    let mut state = BoardState::default();
    state.apply(1, fetch_outcome(source.as_ref(), 1).await);

    if json {
        if state.has_error() {
            anyhow::bail!(NO_TICKET_JOBS_MESSAGE);
        }
        let pretty = serde_json::to_string_pretty(&state.ticket_jobs)
            .context("Failed to serialize ticket jobs")?;
        println!("{}", pretty);
        return Ok(());
    }

    print!(
        "{}",
        render_board(&BoardView::from_state(&state, &config.display_zone))
    );
    Ok(())
}
