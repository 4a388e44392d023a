//! Ticket job poller
//!
//! Fetches the ticket job snapshot on a fixed interval and publishes the
//! resulting [`BoardState`] through a watch channel.
//! Every poll runs in its own task and carries a generation number, so a slow
//! response can never overwrite the result of a newer poll.

use std::sync::Arc;

use ticketboard_client::TicketJobSource;
use tokio::sync::watch;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::{self, Duration, MissedTickBehavior};
use tracing::{debug, info, warn};

use super::state::{BoardState, PollOutcome};

type StateSender = Arc<watch::Sender<Arc<BoardState>>>;

/// Fetch once and log how it went
pub async fn fetch_outcome(source: &dyn TicketJobSource, generation: u64) -> PollOutcome {
    debug!(generation, "Polling ticket jobs");

    let outcome = source.fetch_ticket_jobs().await;
    match &outcome {
        Ok(ticket_jobs) => debug!(generation, "Fetched {} ticket job(s)", ticket_jobs.len()),
        Err(e) => warn!(generation, kind = e.kind(), "Ticket job poll failed: {}", e),
    }

    outcome
}

/// Poller that keeps the board state current
pub struct TicketJobPoller {
    source: Arc<dyn TicketJobSource>,
    interval: Duration,
}

impl TicketJobPoller {
    /// Creates a new poller
    pub fn new(source: Arc<dyn TicketJobSource>, interval: Duration) -> Self {
        Self { source, interval }
    }

    /// Starts polling in the background
    ///
    /// The first poll fires immediately. Polling stops when the returned
    /// handle is shut down or dropped.
    pub fn spawn(self) -> PollerHandle {
        let (sender, receiver) = watch::channel(Arc::new(BoardState::default()));
        let task = tokio::spawn(self.run(Arc::new(sender)));

        PollerHandle {
            task,
            state: receiver,
        }
    }

    async fn run(self, state: StateSender) {
        info!("Starting ticket job poller (interval: {:?})", self.interval);

        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        // Dropping the set aborts every in-flight poll.
        let mut in_flight = JoinSet::new();
        let mut generation = 0u64;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    generation += 1;
                    in_flight.spawn(Self::poll_once(
                        generation,
                        Arc::clone(&self.source),
                        Arc::clone(&state),
                    ));
                }
                Some(joined) = in_flight.join_next() => {
                    if let Err(e) = joined {
                        if !e.is_cancelled() {
                            warn!("Poll task panicked: {}", e);
                        }
                    }
                }
            }
        }
    }

    async fn poll_once(generation: u64, source: Arc<dyn TicketJobSource>, state: StateSender) {
        let outcome = fetch_outcome(source.as_ref(), generation).await;

        let applied =
            state.send_if_modified(|current| Arc::make_mut(current).apply(generation, outcome));

        if !applied {
            debug!(generation, "Discarded stale poll result");
        }
    }
}

/// Owns a running poller
///
/// Dropping the handle stops the poller as well; [`PollerHandle::shutdown`]
/// additionally waits until the loop has stopped.
pub struct PollerHandle {
    task: JoinHandle<()>,
    state: watch::Receiver<Arc<BoardState>>,
}

impl PollerHandle {
    /// A receiver notified on every published state
    pub fn subscribe(&self) -> watch::Receiver<Arc<BoardState>> {
        self.state.clone()
    }

    /// The most recently published state
    pub fn current(&self) -> Arc<BoardState> {
        Arc::clone(&*self.state.borrow())
    }

    /// Stops polling; no poll is issued or applied afterwards
    pub async fn shutdown(mut self) {
        self.task.abort();
        let _ = (&mut self.task).await;
        info!("Ticket job poller stopped");
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
