//! Scheduler layer
//!
//! Polls the ticket-jobs backend on a fixed interval and publishes the latest
//! board state. The render layer only ever reads what is published here.

pub mod poller;
pub mod state;

pub use poller::{PollerHandle, TicketJobPoller, fetch_outcome};
pub use state::{BoardState, NO_TICKET_JOBS_MESSAGE};
