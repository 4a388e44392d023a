//! Core domain types
//!
//! These types mirror the records produced by the external ticket job
//! processor. They are read-only snapshots; nothing here mutates or persists
//! them.

pub mod state;
pub mod ticket_job;
pub mod timestamp;

pub use state::{JobState, TicketType};
pub use ticket_job::{Step, TicketJob};
pub use timestamp::{Timestamp, TimestampError};
