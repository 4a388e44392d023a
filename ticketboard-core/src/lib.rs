//! Ticketboard Core
//!
//! Core types for the ticket job dashboard.
//!
//! This crate contains:
//! - Domain types: Ticket jobs, their processing steps and lifecycle states
//! - DTOs: The response envelope served by the ticket-jobs backend

pub mod domain;
pub mod dto;
