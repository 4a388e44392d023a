//! Dashboard configuration
//!
//! Defines where ticket jobs are fetched from, for which customer, how often,
//! and in which zone their timestamps are displayed.

use std::time::Duration;

use crate::render::DisplayZone;

/// Default backend base URL
pub const DEFAULT_ENDPOINT_URL: &str = "http://localhost:63007/admin-mosaic";

/// Default customer scope
pub const DEFAULT_CUSTOMER_ID: &str = "VALID_USER";

/// Default poll interval in milliseconds
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 5000;

/// Dashboard configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the ticket-jobs backend
    pub endpoint_url: String,

    /// Customer whose ticket jobs are shown
    pub customer_id: String,

    /// How often the backend is polled
    pub poll_interval: Duration,

    /// Zone used to display timestamps
    pub display_zone: DisplayZone,
}

impl Config {
    /// Creates a new configuration with defaults for everything but the endpoint
    pub fn new(endpoint_url: String, customer_id: String) -> Self {
        Self {
            endpoint_url,
            customer_id,
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            display_zone: DisplayZone::Local,
        }
    }

    pub fn with_poll_interval_ms(mut self, poll_interval_ms: u64) -> Self {
        self.poll_interval = Duration::from_millis(poll_interval_ms);
        self
    }

    pub fn with_display_zone(mut self, display_zone: DisplayZone) -> Self {
        self.display_zone = display_zone;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.endpoint_url.is_empty() {
            anyhow::bail!("endpoint_url cannot be empty");
        }

        if !self.endpoint_url.starts_with("http://") && !self.endpoint_url.starts_with("https://")
        {
            anyhow::bail!("endpoint_url must start with http:// or https://");
        }

        if self.customer_id.trim().is_empty() {
            anyhow::bail!("customer_id cannot be empty");
        }

        if self.poll_interval.is_zero() {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(
            DEFAULT_ENDPOINT_URL.to_string(),
            DEFAULT_CUSTOMER_ID.to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.poll_interval, Duration::from_millis(5000));
        assert_eq!(config.customer_id, "VALID_USER");
        assert_eq!(config.display_zone, DisplayZone::Local);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        config.endpoint_url = "localhost:63007".to_string();
        assert!(config.validate().is_err());

        config.endpoint_url = "https://tickets.example.com".to_string();
        assert!(config.validate().is_ok());

        config.customer_id = "  ".to_string();
        assert!(config.validate().is_err());

        config.customer_id = "C1".to_string();
        config = config.with_poll_interval_ms(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builders() {
        let zone: DisplayZone = "+01:00".parse().unwrap();
        let config = Config::default()
            .with_poll_interval_ms(250)
            .with_display_zone(zone);

        assert_eq!(config.poll_interval, Duration::from_millis(250));
        assert_eq!(config.display_zone, zone);
    }
}
