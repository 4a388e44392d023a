//! Ticketboard HTTP Client
//!
//! A small, type-safe client for the ticket-jobs backend.
//!
//! The backend is an external collaborator: this crate only reads from it.
//! Responses are validated before they reach callers, so a successful call
//! always yields a well-formed ticket job sequence.
//!
//! # Example
//!
//! ```no_run
//! use ticketboard_client::TicketJobClient;
//!
//! #[tokio::main]
//! async fn main() -> ticketboard_client::Result<()> {
//!     let client = TicketJobClient::new("http://localhost:63007/admin-mosaic");
//!
//!     let jobs = client.list_ticket_jobs("VALID_USER").await?;
//!     println!("Fetched {} ticket job(s)", jobs.len());
//!     Ok(())
//! }
//! ```

pub mod error;
mod source;
mod tickets;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use source::{CustomerTicketJobs, TicketJobSource};
pub use tickets::parse_ticket_jobs;

use reqwest::Client;

/// HTTP client for the ticket-jobs backend
#[derive(Debug, Clone)]
pub struct TicketJobClient {
    /// Base URL of the backend (e.g., "http://localhost:63007/admin-mosaic")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl TicketJobClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the backend; a trailing `/` is ignored
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use ticketboard_client::TicketJobClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(10))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = TicketJobClient::with_client("http://localhost:63007", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the backend
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check the status code and return the body as text
    async fn handle_text_response(&self, response: reqwest::Response) -> Result<String> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(response.text().await?)
    }
}
