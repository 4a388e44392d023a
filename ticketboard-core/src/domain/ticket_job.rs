//! Ticket job and step records

use serde::{Deserialize, Serialize};

use super::state::{JobState, TicketType};
use super::timestamp::Timestamp;

/// One customer-facing unit of work
///
/// Step order is the processing order assigned by the producer and is never
/// re-sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketJob {
    pub id: String,
    pub state: JobState,
    pub created_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_at: Option<Timestamp>,
    #[serde(rename = "type")]
    pub ticket_type: TicketType,
    pub customer_number: String,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One processing step inside a ticket job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub id: String,
    pub state: JobState,
    /// Free-form category assigned by the producer, e.g. `CREATE_TICKET`
    #[serde(rename = "type")]
    pub step_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}

impl Step {
    /// When the step stopped running, successfully or not
    pub fn ended_at(&self) -> Option<&Timestamp> {
        self.finished_at.as_ref().or(self.failed_at.as_ref())
    }
}
