//! Lifecycle states and ticket categories

use serde::{Deserialize, Serialize};

/// Lifecycle state of a ticket job or one of its steps
///
/// Unknown values are kept verbatim in [`JobState::Other`] so that a newer
/// producer never breaks deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobState {
    Pending,
    Finished,
    Error,
    Other(String),
}

impl JobState {
    /// Wire representation of the state
    pub fn as_str(&self) -> &str {
        match self {
            JobState::Pending => "PENDING",
            JobState::Finished => "FINISHED",
            JobState::Error => "ERROR",
            JobState::Other(raw) => raw,
        }
    }

    /// Single glyph shown for this state. Every state maps to one.
    pub fn glyph(&self) -> &'static str {
        match self {
            JobState::Error => "❌",
            JobState::Finished => "✅",
            JobState::Pending => "⏳",
            JobState::Other(_) => "❔",
        }
    }

    /// Style class derived from the state (lowercased wire value)
    pub fn style_class(&self) -> String {
        self.as_str().to_lowercase()
    }
}

impl From<String> for JobState {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "PENDING" => JobState::Pending,
            "FINISHED" => JobState::Finished,
            "ERROR" => JobState::Error,
            _ => JobState::Other(raw),
        }
    }
}

impl From<&str> for JobState {
    fn from(raw: &str) -> Self {
        JobState::from(raw.to_string())
    }
}

impl From<JobState> for String {
    fn from(state: JobState) -> Self {
        match state {
            JobState::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for JobState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of a ticket job
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TicketType {
    /// One-off ticket purchase
    NonSubscription,
    /// Contract renewal
    Subscription,
    Other(String),
}

impl TicketType {
    pub fn as_str(&self) -> &str {
        match self {
            TicketType::NonSubscription => "NON_SUBSCRIPTION",
            TicketType::Subscription => "SUBSCRIPTION",
            TicketType::Other(raw) => raw,
        }
    }

    /// Human-readable label; unknown categories pass through unchanged
    pub fn label(&self) -> &str {
        match self {
            TicketType::NonSubscription => "Einzelticket",
            TicketType::Subscription => "Vertragsverlängerung",
            TicketType::Other(raw) => raw,
        }
    }
}

impl From<String> for TicketType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "NON_SUBSCRIPTION" => TicketType::NonSubscription,
            "SUBSCRIPTION" => TicketType::Subscription,
            _ => TicketType::Other(raw),
        }
    }
}

impl From<&str> for TicketType {
    fn from(raw: &str) -> Self {
        TicketType::from(raw.to_string())
    }
}

impl From<TicketType> for String {
    fn from(ticket_type: TicketType) -> Self {
        match ticket_type {
            TicketType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for TicketType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_mapping() {
        assert_eq!(JobState::Error.glyph(), "❌");
        assert_eq!(JobState::Finished.glyph(), "✅");
        assert_eq!(JobState::Pending.glyph(), "⏳");
        assert_eq!(JobState::from("CANCELLED").glyph(), "❔");
        assert_eq!(JobState::from("").glyph(), "❔");
    }

    #[test]
    fn test_unknown_state_is_kept() {
        let state: JobState = serde_json::from_str("\"RETRYING\"").unwrap();
        assert_eq!(state, JobState::Other("RETRYING".to_string()));
        assert_eq!(state.style_class(), "retrying");
        assert_eq!(serde_json::to_string(&state).unwrap(), "\"RETRYING\"");
    }

    #[test]
    fn test_known_state_parses() {
        let state: JobState = serde_json::from_str("\"ERROR\"").unwrap();
        assert_eq!(state, JobState::Error);
        assert_eq!(state.style_class(), "error");
    }

    #[test]
    fn test_ticket_type_labels() {
        assert_eq!(TicketType::from("SUBSCRIPTION").label(), "Vertragsverlängerung");
        assert_eq!(TicketType::from("NON_SUBSCRIPTION").label(), "Einzelticket");
        assert_eq!(TicketType::from("GIFT_CARD").label(), "GIFT_CARD");
    }
}
