//! Data Transfer Objects
//!
//! Wire envelopes exchanged with the ticket-jobs backend.

pub mod ticket_job;
