use std::time::Duration;

use async_trait::async_trait;

use crate::domain::model::{CollectorAck, Encoding, SignupRecord};
use crate::domain::ports::Collector;
use crate::utils::error::{Result, SubmitError};
use crate::utils::validation::validate_url;

/// HTTP client for the signup collector endpoint (a scripted spreadsheet
/// backend in the usual deployment). One POST per record, with the email
/// and capture timestamp encoded per the configured [`Encoding`].
pub struct HttpCollector {
    endpoint: String,
    encoding: Encoding,
    client: reqwest::Client,
}

impl HttpCollector {
    pub fn new(endpoint: &str, encoding: Encoding, timeout: Duration) -> Result<Self> {
        validate_url("collector.endpoint", endpoint)?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SubmitError::Config {
                message: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            endpoint: endpoint.to_string(),
            encoding,
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Collector for HttpCollector {
    async fn deliver(&self, record: &SignupRecord) -> Result<CollectorAck> {
        let timestamp = record.wire_timestamp();

        let request = match self.encoding {
            Encoding::Query => self.client.post(&self.endpoint).query(&[
                ("email", record.email.as_str()),
                ("timestamp", timestamp.as_str()),
            ]),
            Encoding::Multipart => {
                let form = reqwest::multipart::Form::new()
                    .text("email", record.email.clone())
                    .text("timestamp", timestamp);
                self.client.post(&self.endpoint).multipart(form)
            }
        };

        tracing::debug!("POST {} ({:?} encoding)", self.endpoint, self.encoding);
        let response = request.send().await?;

        let status = response.status();
        tracing::debug!("Collector response status: {}", status);

        if !status.is_success() {
            return Err(SubmitError::NetworkStatus {
                status: status.as_u16(),
            });
        }

        // A 2xx response must carry the structured acknowledgment.
        let ack = response.json::<CollectorAck>().await?;
        Ok(ack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use httpmock::prelude::*;

    fn record() -> SignupRecord {
        SignupRecord {
            email: "user@example.com".to_string(),
            captured_at: Utc::now(),
        }
    }

    #[test]
    fn test_new_rejects_invalid_endpoint() {
        assert!(HttpCollector::new("not-a-url", Encoding::Query, Duration::from_secs(5)).is_err());
        assert!(HttpCollector::new("", Encoding::Query, Duration::from_secs(5)).is_err());
    }

    #[tokio::test]
    async fn test_query_encoding_sends_url_parameters() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/exec")
                .query_param("email", "user@example.com")
                .query_param_exists("timestamp");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"status": "success"}));
        });

        let collector =
            HttpCollector::new(&server.url("/exec"), Encoding::Query, Duration::from_secs(5))
                .unwrap();
        let ack = collector.deliver(&record()).await.unwrap();

        mock.assert();
        assert!(ack.is_success());
    }

    #[tokio::test]
    async fn test_multipart_encoding_sends_form_fields() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/exec")
                .body_contains("name=\"email\"")
                .body_contains("user@example.com")
                .body_contains("name=\"timestamp\"");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"status": "success"}));
        });

        let collector = HttpCollector::new(
            &server.url("/exec"),
            Encoding::Multipart,
            Duration::from_secs(5),
        )
        .unwrap();
        let ack = collector.deliver(&record()).await.unwrap();

        mock.assert();
        assert!(ack.is_success());
    }

    #[tokio::test]
    async fn test_http_error_status_is_a_network_error() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/exec");
            then.status(500);
        });

        let collector =
            HttpCollector::new(&server.url("/exec"), Encoding::Query, Duration::from_secs(5))
                .unwrap();
        let result = collector.deliver(&record()).await;

        mock.assert();
        match result {
            Err(SubmitError::NetworkStatus { status }) => assert_eq!(status, 500),
            other => panic!("expected NetworkStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_rejection_ack_is_passed_through() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/exec");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"status": "error", "message": "duplicate"}));
        });

        let collector =
            HttpCollector::new(&server.url("/exec"), Encoding::Query, Duration::from_secs(5))
                .unwrap();
        let ack = collector.deliver(&record()).await.unwrap();

        mock.assert();
        assert!(!ack.is_success());
        assert_eq!(ack.message.as_deref(), Some("duplicate"));
    }

    #[tokio::test]
    async fn test_unparseable_ack_is_an_error() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/exec");
            then.status(200).body("not json");
        });

        let collector =
            HttpCollector::new(&server.url("/exec"), Encoding::Query, Duration::from_secs(5))
                .unwrap();
        let result = collector.deliver(&record()).await;

        mock.assert();
        assert!(matches!(result, Err(SubmitError::Network(_))));
    }
}
