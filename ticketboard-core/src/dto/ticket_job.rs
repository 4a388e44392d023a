//! Ticket job DTOs

use serde::{Deserialize, Serialize};

use crate::domain::ticket_job::TicketJob;

/// Body of `GET /ticket-jobs/customers/{customer_id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketJobsResponse {
    pub ticket_jobs: Vec<TicketJob>,
}

/// Name of the field carrying the job sequence
pub const TICKET_JOBS_FIELD: &str = "ticketJobs";
