//! Lead capture forwarding.
//!
//! When a visitor exports an estimate, the wizard submits their email with
//! the inputs and result. Leads are forwarded to an external CRM endpoint on
//! a background task: failures are retried with exponential backoff, then
//! logged and dropped. The visitor's request never waits on, or fails
//! because of, the CRM. At most `LEAD_CAPTURE_MAX_IN_FLIGHT` leads are being
//! forwarded at once; leads beyond that are logged and dropped.

use anyhow::{Context, Result};
use backoff::{future::retry, ExponentialBackoffBuilder};
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Semaphore;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

use crate::config::Settings;
use crate::domain::leads::LeadPayload;

#[derive(Debug, Error)]
pub enum LeadCaptureError {
    #[error("lead capture request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("lead capture endpoint rejected lead with status {0}")]
    Rejected(StatusCode),
}

impl LeadCaptureError {
    /// Network failures, throttling and server errors are worth retrying.
    fn is_transient(&self) -> bool {
        match self {
            Self::Request(_) => true,
            Self::Rejected(status) => {
                status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
            }
        }
    }
}

/// Client for the external lead capture endpoint.
#[derive(Clone)]
pub struct LeadCaptureClient {
    client: Client,
    endpoint: Option<Url>,
    token: Option<String>,
    max_elapsed: Duration,
    in_flight: Arc<Semaphore>,
}

impl LeadCaptureClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.lead_capture_timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        match &settings.lead_capture_url {
            Some(url) => info!(endpoint = %url, "Lead capture enabled"),
            None => warn!("LEAD_CAPTURE_URL not set - leads will be logged and dropped"),
        }

        Ok(Self {
            client,
            endpoint: settings.lead_capture_url.clone(),
            token: settings.lead_capture_token.clone(),
            max_elapsed: Duration::from_secs(settings.lead_capture_max_elapsed_seconds),
            in_flight: Arc::new(Semaphore::new(settings.lead_capture_max_in_flight)),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.endpoint.is_some()
    }

    /// Forward a lead in the background. Returns immediately.
    ///
    /// Returns `false` when the lead was dropped instead of queued.
    pub fn submit(&self, payload: LeadPayload) -> bool {
        let Some(endpoint) = self.endpoint.clone() else {
            info!(
                lead_id = %payload.id,
                calculator = ?payload.calculator,
                "Lead capture disabled, dropping lead"
            );
            return false;
        };

        let Ok(permit) = self.in_flight.clone().try_acquire_owned() else {
            warn!(lead_id = %payload.id, "Too many leads in flight, dropping lead");
            return false;
        };

        let this = self.clone();
        tokio::spawn(async move {
            let _permit = permit;
            match this.forward(&endpoint, &payload).await {
                Ok(()) => info!(lead_id = %payload.id, "Lead forwarded"),
                Err(e) => error!(lead_id = %payload.id, error = %e, "Lead forwarding failed"),
            }
        });
        true
    }

    /// POST the lead, retrying transient failures until the backoff budget runs out.
    #[instrument(skip(self, endpoint, payload), fields(lead_id = %payload.id))]
    async fn forward(&self, endpoint: &Url, payload: &LeadPayload) -> Result<(), LeadCaptureError> {
        let policy = ExponentialBackoffBuilder::new()
            .with_initial_interval(Duration::from_millis(500))
            .with_max_elapsed_time(Some(self.max_elapsed))
            .build();

        retry(policy, || async move {
            self.post_once(endpoint, payload).await.map_err(|e| {
                if e.is_transient() {
                    warn!(error = %e, "Lead capture attempt failed, will retry");
                    backoff::Error::transient(e)
                } else {
                    backoff::Error::permanent(e)
                }
            })
        })
        .await
    }

    async fn post_once(&self, endpoint: &Url, payload: &LeadPayload) -> Result<(), LeadCaptureError> {
        let mut req = self.client.post(endpoint.clone()).json(payload);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        debug!(url = %endpoint, "Lead capture request");

        let status = req.send().await?.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(LeadCaptureError::Rejected(status))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::leads::Calculator;

    #[test]
    fn retry_classification() {
        assert!(LeadCaptureError::Rejected(StatusCode::BAD_GATEWAY).is_transient());
        assert!(LeadCaptureError::Rejected(StatusCode::TOO_MANY_REQUESTS).is_transient());
        assert!(!LeadCaptureError::Rejected(StatusCode::BAD_REQUEST).is_transient());
        assert!(!LeadCaptureError::Rejected(StatusCode::UNAUTHORIZED).is_transient());
    }

    #[test]
    fn disabled_without_endpoint() {
        let client = LeadCaptureClient::new(&Settings::for_tests()).unwrap();
        assert!(!client.is_enabled());
    }

    #[test]
    fn enabled_with_endpoint() {
        let settings = Settings {
            lead_capture_url: Some(Url::parse("https://crm.example.com/hooks/leads").unwrap()),
            ..Settings::for_tests()
        };
        assert!(LeadCaptureClient::new(&settings).unwrap().is_enabled());
    }

    fn lead() -> LeadPayload {
        LeadPayload {
            id: uuid::Uuid::new_v4(),
            email: "jo@example.com".to_string(),
            calculator: Calculator::Btu,
            form_data: serde_json::json!({}),
            calculation_result: serde_json::json!({}),
            submitted_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn disabled_client_drops_leads() {
        let client = LeadCaptureClient::new(&Settings::for_tests()).unwrap();
        assert!(!client.submit(lead()));
    }

    // Nothing listens on the discard port, so forwarding keeps retrying.
    #[tokio::test]
    async fn leads_beyond_the_in_flight_limit_are_dropped() {
        let settings = Settings {
            lead_capture_url: Some(Url::parse("http://127.0.0.1:9/leads").unwrap()),
            lead_capture_max_in_flight: 2,
            ..Settings::for_tests()
        };
        let client = LeadCaptureClient::new(&settings).unwrap();

        assert!(client.submit(lead()));
        assert!(client.submit(lead()));
        assert!(!client.submit(lead()));
        assert_eq!(client.in_flight.available_permits(), 0);
    }
}
