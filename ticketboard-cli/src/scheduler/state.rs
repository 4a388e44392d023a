//! Published board state

use ticketboard_core::domain::TicketJob;

/// Message shown whenever a poll yields no usable ticket jobs
pub const NO_TICKET_JOBS_MESSAGE: &str = "Keine TicketJobs gefunden";

/// Result of one poll
pub type PollOutcome = ticketboard_client::Result<Vec<TicketJob>>;

/// The latest snapshot or error, as seen by the render layer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardState {
    /// Snapshot from the most recent applied poll, in server order
    pub ticket_jobs: Vec<TicketJob>,
    pub error_message: Option<String>,
    /// Generation of the poll that produced this state; 0 before any poll
    pub generation: u64,
}

impl BoardState {
    /// Applies the outcome of the poll issued as `generation`
    ///
    /// Outcomes from a poll older than the one already applied are ignored.
    /// A success replaces the snapshot wholesale; any failure empties it.
    ///
    /// # Returns
    /// Whether the state changed
    pub fn apply(&mut self, generation: u64, outcome: PollOutcome) -> bool {
        if generation <= self.generation {
            return false;
        }

        self.generation = generation;
        match outcome {
            Ok(ticket_jobs) => {
                self.ticket_jobs = ticket_jobs;
                self.error_message = None;
            }
            Err(_) => {
                self.ticket_jobs.clear();
                self.error_message = Some(NO_TICKET_JOBS_MESSAGE.to_string());
            }
        }

        true
    }

    pub fn has_error(&self) -> bool {
        self.error_message.is_some()
    }
}
