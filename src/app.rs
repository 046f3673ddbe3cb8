//! The login → fetch points → notify pipeline.
//!
//! Each stage returns a `Result`; `App::run` decides after every stage
//! whether to go on and reports how far the run got as a `RunOutcome`.

use std::fmt;

use anyhow::Result;
use chrono::{DateTime, Local, TimeZone};
use tracing::{error, info};

use crate::api::ApiClient;
use crate::auth::Credentials;
use crate::config::Config;
use crate::notifier::Notifier;
use crate::utils::TimestampStyle;

/// How far a run got before it ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Logged in, read the points and delivered the notification
    Notified,
    /// Login failed; nothing else was called
    LoginFailed,
    /// Points could not be read; no notification was sent
    PointsUnavailable,
    /// Points were read but the webhook post failed
    NotificationFailed,
}

pub struct App {
    api: ApiClient,
    notifier: Notifier,
    credentials: Credentials,
    timestamp_style: TimestampStyle,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let api = ApiClient::new(&config.base_url)?;
        // The webhook shares the API client's connection pool and headers
        let notifier = Notifier::new(api.http_client(), &config.webhook_url);

        Ok(Self {
            api,
            notifier,
            credentials: config.credentials,
            timestamp_style: config.timestamp_style,
        })
    }

    /// Run the pipeline once, stamped with the current local time
    pub async fn run(&self) -> RunOutcome {
        self.run_at(Local::now()).await
    }

    /// Run the pipeline once, reporting `started_at` as the login time
    pub async fn run_at<Tz>(&self, started_at: DateTime<Tz>) -> RunOutcome
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let timestamp = self.timestamp_style.format(&started_at);

        let token = match self.api.authenticate(&self.credentials).await {
            Ok(token) => token,
            Err(e) => {
                error!("Login failed: {:#}", e);
                return RunOutcome::LoginFailed;
            }
        };

        // No notification without a balance
        let points = match self.api.fetch_points(&token).await {
            Ok(points) => points,
            Err(e) => {
                error!("Failed to fetch points: {:#}", e);
                return RunOutcome::PointsUnavailable;
            }
        };

        match self.notifier.send(&points, &timestamp).await {
            Ok(()) => {
                info!(points = %points, time = %timestamp.time, date = %timestamp.date, "Notification sent");
                RunOutcome::Notified
            }
            Err(e) => {
                error!("Failed to send notification: {:#}", e);
                RunOutcome::NotificationFailed
            }
        }
    }
}
