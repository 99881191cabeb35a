//! Slack incoming-webhook delivery.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::NotifyError;

/// Request timeout for the webhook POST.
const DELIVERY_TIMEOUT: Duration = Duration::from_secs(30);

/// Webhook payload. Slack renders the single `text` field as mrkdwn.
#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    text: &'a str,
}

/// Client for a Slack incoming webhook.
pub struct SlackWebhook {
    webhook_url: String,
    client: Client,
}

impl SlackWebhook {
    /// Create a webhook client for the given URL.
    pub fn new(webhook_url: String) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(DELIVERY_TIMEOUT)
            .build()
            .map_err(|e| NotifyError::Delivery {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            webhook_url,
            client,
        })
    }

    /// Post one message to the webhook.
    ///
    /// A non-success status surfaces as [`NotifyError::Delivery`] carrying
    /// the status and response body.
    pub async fn send(&self, text: &str) -> Result<(), NotifyError> {
        debug!("Delivering digest to webhook");

        let response = self
            .client
            .post(&self.webhook_url)
            .json(&WebhookPayload { text })
            .send()
            .await
            .map_err(|e| NotifyError::Delivery {
                reason: format!("request failed: {e}"),
            })?;

        let status = response.status();
        if status.is_success() {
            debug!("Digest delivered");
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();

            warn!(
                status = %status,
                body = %body,
                "Webhook rejected digest"
            );

            Err(NotifyError::Delivery {
                reason: format!("webhook returned {status}: {body}"),
            })
        }
    }
}
