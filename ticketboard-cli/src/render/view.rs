//! View tree
//!
//! A pure mapping from the published board state to what is shown. Each job
//! becomes a [`JobView`] with its scalar fields laid out in rows and its steps
//! listed in processing order.

use ticketboard_core::domain::{Step, TicketJob};

use super::zone::DisplayZone;
use crate::scheduler::BoardState;

/// Number of detail pairs per row
pub const ROW_WIDTH: usize = 4;

/// Everything shown on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardView {
    /// An error is published; no job list is shown
    Message(String),
    /// Ticket jobs in snapshot order
    Jobs(Vec<JobView>),
}

/// One ticket job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobView {
    /// Stable key (the job id)
    #[allow(dead_code)]
    pub key: String,
    /// Style class derived from the job state
    pub style: String,
    pub rows: Vec<Vec<DetailPair>>,
    pub steps: Vec<StepView>,
}

/// A labeled value of a ticket job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPair {
    pub label: &'static str,
    pub value: String,
    /// Set only on the state pair
    pub style: Option<String>,
}

/// One processing step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView {
    /// Stable key (the step id)
    #[allow(dead_code)]
    pub key: String,
    pub style: String,
    pub glyph: &'static str,
    pub started: String,
    /// Finish time, or failure time if the step never finished
    pub ended: String,
    pub label: String,
}

/// A displayable field of a ticket job and how to format it
struct JobField {
    label: &'static str,
    display: fn(&TicketJob, &DisplayZone) -> Option<String>,
    styled: bool,
}

const JOB_FIELDS: &[JobField] = &[
    JobField {
        label: "id",
        display: show_id,
        styled: false,
    },
    JobField {
        label: "state",
        display: show_state,
        styled: true,
    },
    JobField {
        label: "createdAt",
        display: show_created_at,
        styled: false,
    },
    JobField {
        label: "startedAt",
        display: show_started_at,
        styled: false,
    },
    JobField {
        label: "failedAt",
        display: show_failed_at,
        styled: false,
    },
    JobField {
        label: "type",
        display: show_type,
        styled: false,
    },
    JobField {
        label: "customerNumber",
        display: show_customer_number,
        styled: false,
    },
];

fn show_id(job: &TicketJob, _: &DisplayZone) -> Option<String> {
    Some(job.id.clone())
}

fn show_state(job: &TicketJob, _: &DisplayZone) -> Option<String> {
    Some(job.state.glyph().to_string())
}

fn show_created_at(job: &TicketJob, zone: &DisplayZone) -> Option<String> {
    Some(zone.format_date(Some(&job.created_at)))
}

fn show_started_at(job: &TicketJob, zone: &DisplayZone) -> Option<String> {
    job.started_at.as_ref().map(|ts| zone.format_date(Some(ts)))
}

fn show_failed_at(job: &TicketJob, zone: &DisplayZone) -> Option<String> {
    job.failed_at.as_ref().map(|ts| zone.format_date(Some(ts)))
}

fn show_type(job: &TicketJob, _: &DisplayZone) -> Option<String> {
    Some(job.ticket_type.label().to_string())
}

fn show_customer_number(job: &TicketJob, _: &DisplayZone) -> Option<String> {
    Some(job.customer_number.clone())
}

impl BoardView {
    /// Builds the view for the given state
    pub fn from_state(state: &BoardState, zone: &DisplayZone) -> Self {
        match &state.error_message {
            Some(message) => BoardView::Message(message.clone()),
            None => BoardView::Jobs(
                state
                    .ticket_jobs
                    .iter()
                    .map(|job| JobView::from_job(job, zone))
                    .collect(),
            ),
        }
    }
}

impl JobView {
    pub fn from_job(job: &TicketJob, zone: &DisplayZone) -> Self {
        let style = job.state.style_class();

        // Absent optional fields are skipped before the pairs are chunked.
        let pairs: Vec<DetailPair> = JOB_FIELDS
            .iter()
            .filter_map(|field| {
                (field.display)(job, zone).map(|value| DetailPair {
                    label: field.label,
                    value,
                    style: field.styled.then(|| style.clone()),
                })
            })
            .collect();

        Self {
            key: job.id.clone(),
            rows: pairs.chunks(ROW_WIDTH).map(<[DetailPair]>::to_vec).collect(),
            steps: job
                .steps
                .iter()
                .map(|step| StepView::from_step(step, zone))
                .collect(),
            style,
        }
    }
}

impl StepView {
    pub fn from_step(step: &Step, zone: &DisplayZone) -> Self {
        Self {
            key: step.id.clone(),
            style: step.state.style_class(),
            glyph: step.state.glyph(),
            started: zone.format_time(step.started_at.as_ref()),
            ended: zone.format_time(step.ended_at()),
            label: step.step_type.replace('_', " "),
        }
    }
}
