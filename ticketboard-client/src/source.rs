//! Ticket job sources
//!
//! The poller only needs "give me the current jobs"; this trait is that seam.

use async_trait::async_trait;
use ticketboard_core::domain::TicketJob;

use crate::TicketJobClient;
use crate::error::Result;

/// Something that can produce the current ticket job snapshot
#[async_trait]
pub trait TicketJobSource: Send + Sync {
    /// Fetches the full, current list of ticket jobs in server order
    async fn fetch_ticket_jobs(&self) -> Result<Vec<TicketJob>>;
}

/// Ticket jobs of one fixed customer, fetched over HTTP
#[derive(Debug, Clone)]
pub struct CustomerTicketJobs {
    client: TicketJobClient,
    customer_id: String,
}

impl CustomerTicketJobs {
    pub fn new(client: TicketJobClient, customer_id: impl Into<String>) -> Self {
        Self {
            client,
            customer_id: customer_id.into(),
        }
    }
}

#[async_trait]
impl TicketJobSource for CustomerTicketJobs {
    async fn fetch_ticket_jobs(&self) -> Result<Vec<TicketJob>> {
        self.client.list_ticket_jobs(&self.customer_id).await
    }
}
