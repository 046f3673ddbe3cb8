//! Chat webhook notifications.
//!
//! Posts a Slack-style `{"text": ...}` payload to a pre-registered webhook.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::api::ApiError;
use crate::models::Points;
use crate::utils::FormattedTimestamp;

#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    text: &'a str,
}

/// Build the message text for a points report
pub fn build_message(points: &Points, timestamp: &FormattedTimestamp) -> String {
    format!(
        "Logged in at {} on {}.\nTotal points: {}",
        timestamp.time, timestamp.date, points
    )
}

#[derive(Clone)]
pub struct Notifier {
    client: Client,
    webhook_url: String,
}

impl Notifier {
    pub fn new(client: Client, webhook_url: &str) -> Self {
        Self {
            client,
            webhook_url: webhook_url.to_string(),
        }
    }

    /// Post the points report to the webhook
    pub async fn send(&self, points: &Points, timestamp: &FormattedTimestamp) -> Result<()> {
        let text = build_message(points, timestamp);

        let response = self
            .client
            .post(&self.webhook_url)
            .json(&WebhookPayload { text: &text })
            .send()
            .await
            .map_err(ApiError::from)
            .context("Failed to send webhook notification")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &body))
                .context("Webhook rejected the notification");
        }

        debug!(status = %status, "Notification delivered");
        Ok(())
    }
}
