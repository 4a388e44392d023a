//! Ticket job endpoints

use reqwest::Url;
use serde_json::Value;
use ticketboard_core::domain::TicketJob;
use ticketboard_core::dto::ticket_job::{TICKET_JOBS_FIELD, TicketJobsResponse};
use tracing::debug;

use crate::TicketJobClient;
use crate::error::{ClientError, Result};

impl TicketJobClient {
    /// URL of the ticket job listing for one customer
    ///
    /// The customer id is encoded as a single path segment.
    pub fn ticket_jobs_url(&self, customer_id: &str) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            ClientError::InvalidRequest(format!("invalid base URL {}: {}", self.base_url, e))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                ClientError::InvalidRequest(format!(
                    "base URL cannot carry a path: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(["ticket-jobs", "customers", customer_id]);

        Ok(url)
    }

    /// List all ticket jobs of a customer
    ///
    /// # Arguments
    /// * `customer_id` - Opaque customer identifier
    ///
    /// # Returns
    /// The ticket jobs in the order the backend sent them
    pub async fn list_ticket_jobs(&self, customer_id: &str) -> Result<Vec<TicketJob>> {
        let url = self.ticket_jobs_url(customer_id)?;
        debug!(%url, "Fetching ticket jobs");

        let response = self.client.get(url).send().await?;
        let body = self.handle_text_response(response).await?;

        parse_ticket_jobs(&body)
    }
}

/// Validate and decode a ticket jobs response body
///
/// The body must be a JSON object whose `ticketJobs` field is an array of
/// ticket job records. Anything else is rejected; no partial data is kept.
pub fn parse_ticket_jobs(body: &str) -> Result<Vec<TicketJob>> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))?;

    match value.get(TICKET_JOBS_FIELD) {
        None => {
            return Err(ClientError::ShapeError(format!(
                "missing `{}` field",
                TICKET_JOBS_FIELD
            )));
        }
        Some(jobs) if !jobs.is_array() => {
            return Err(ClientError::ShapeError(format!(
                "`{}` is {} instead of an array",
                TICKET_JOBS_FIELD,
                json_kind(jobs)
            )));
        }
        Some(_) => {}
    }

    let response: TicketJobsResponse = serde_json::from_value(value).map_err(|e| {
        ClientError::ShapeError(format!("ticket job record does not match: {}", e))
    })?;

    Ok(response.ticket_jobs)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Json, Router,
        extract::Path,
        http::StatusCode,
        response::{IntoResponse, Response},
        routing::get,
    };
    use serde_json::json;
    use ticketboard_core::domain::{JobState, TicketType};

    const ONE_JOB: &str = r#"{"ticketJobs":[{"id":"1","state":"PENDING",
        "createdAt":"2024-01-01T00:00:00Z","type":"SUBSCRIPTION",
        "customerNumber":"C1","steps":[]}]}"#;

    async fn ticket_jobs(Path(customer): Path<String>) -> Response {
        match customer.as_str() {
            "VALID_USER" => Json(json!({
                "ticketJobs": [
                    {
                        "id": "b", "state": "FINISHED", "createdAt": "2024-01-02T00:00:00Z",
                        "type": "NON_SUBSCRIPTION", "customerNumber": "C1",
                        "steps": [
                            { "id": "s1", "state": "FINISHED", "type": "CREATE_TICKET" }
                        ]
                    },
                    {
                        "id": "a", "state": "PENDING", "createdAt": "2024-01-01T00:00:00Z",
                        "type": "SUBSCRIPTION", "customerNumber": "C1", "steps": []
                    }
                ]
            }))
            .into_response(),
            "NO_FIELD" => Json(json!({})).into_response(),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        }
    }

    async fn spawn_backend() -> String {
        let app = Router::new().route(
            "/admin-mosaic/ticket-jobs/customers/{customer}",
            get(ticket_jobs),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/admin-mosaic", addr)
    }

    #[test]
    fn test_ticket_jobs_url() {
        let client = TicketJobClient::new("http://localhost:63007/admin-mosaic/");
        let url = client.ticket_jobs_url("VALID_USER").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:63007/admin-mosaic/ticket-jobs/customers/VALID_USER"
        );
    }

    #[test]
    fn test_ticket_jobs_url_without_base_path() {
        let client = TicketJobClient::new("http://localhost:8080");
        let url = client.ticket_jobs_url("A B/C").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/ticket-jobs/customers/A%20B%2FC"
        );
    }

    #[test]
    fn test_ticket_jobs_url_rejects_garbage_base() {
        let client = TicketJobClient::new("not a url");
        assert!(matches!(
            client.ticket_jobs_url("C1"),
            Err(ClientError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_parse_well_formed() {
        let jobs = parse_ticket_jobs(ONE_JOB).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].state, JobState::Pending);
        assert_eq!(jobs[0].ticket_type, TicketType::Subscription);
    }

    #[test]
    fn test_parse_empty_list_is_ok() {
        assert!(parse_ticket_jobs(r#"{"ticketJobs":[]}"#).unwrap().is_empty());
    }

    #[test]
    fn test_parse_missing_field() {
        let err = parse_ticket_jobs("{}").unwrap_err();
        assert!(matches!(err, ClientError::ShapeError(_)));
    }

    #[test]
    fn test_parse_field_not_a_list() {
        for body in [
            r#"{"ticketJobs":null}"#,
            r#"{"ticketJobs":{}}"#,
            r#"{"ticketJobs":"1,2"}"#,
            r#"[{"ticketJobs":[]}]"#,
        ] {
            let err = parse_ticket_jobs(body).unwrap_err();
            assert!(err.is_shape(), "{} should be a shape error", body);
        }
    }

    #[test]
    fn test_parse_malformed_record() {
        let err = parse_ticket_jobs(r#"{"ticketJobs":[{"id":"1"}]}"#).unwrap_err();
        assert!(matches!(err, ClientError::ShapeError(_)));
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_ticket_jobs("<html>").unwrap_err();
        assert!(matches!(err, ClientError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_list_ticket_jobs_preserves_order() {
        let client = TicketJobClient::new(spawn_backend().await);

        let jobs = client.list_ticket_jobs("VALID_USER").await.unwrap();

        let ids: Vec<&str> = jobs.iter().map(|job| job.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
        assert_eq!(jobs[0].steps[0].step_type, "CREATE_TICKET");
    }

    #[tokio::test]
    async fn test_list_ticket_jobs_missing_field() {
        let client = TicketJobClient::new(spawn_backend().await);

        let err = client.list_ticket_jobs("NO_FIELD").await.unwrap_err();
        assert!(matches!(err, ClientError::ShapeError(_)));
    }

    #[tokio::test]
    async fn test_list_ticket_jobs_server_error() {
        let client = TicketJobClient::new(spawn_backend().await);

        let err = client.list_ticket_jobs("BROKEN").await.unwrap_err();
        assert!(matches!(err, ClientError::ApiError { status: 500, .. }));
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_list_ticket_jobs_unreachable() {
        // Port 9 (discard) is not expected to accept HTTP connections.
        let client = TicketJobClient::new("http://127.0.0.1:9");

        let err = client.list_ticket_jobs("VALID_USER").await.unwrap_err();
        assert!(matches!(err, ClientError::RequestFailed(_)));
    }
}
