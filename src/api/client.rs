//! API client for the points REST API.
//!
//! This module provides the `ApiClient` struct for the two calls the relay
//! makes: the password-grant login and the current-user lookup.

use anyhow::{Context, Result};
use reqwest::{multipart, Client};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::auth::{Credentials, SessionToken};
use crate::models::{CurrentUserResponse, Points, TokenResponse};

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// Password-grant login endpoint, relative to the base URL
const TOKEN_PATH: &str = "/rest-api/oauth/access_token";

/// Current user resource, relative to the base URL
const CURRENT_USER_PATH: &str = "/rest-api/v1/users/me";

/// The API rejects requests that don't look like they come from a browser.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/127.0.0.0 Safari/537.36 Edg/127.0.0.0";

/// API client for the points service.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client for the given base URL
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self::with_client(client, base_url))
    }

    /// Create an ApiClient that shares an existing connection pool
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The underlying HTTP client, for sharing its connection pool
    pub fn http_client(&self) -> Client {
        self.client.clone()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Exchange credentials for a bearer token
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<SessionToken> {
        let url = self.url(TOKEN_PATH);

        let form = credentials
            .form_fields()
            .into_iter()
            .fold(multipart::Form::new(), |form, (name, value)| form.text(name, value));

        debug!(url = %url, username = %credentials.username, "Sending login request");

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(ApiError::from)
            .context("Failed to send login request")?;

        let response = Self::check_response(response).await?;

        let auth: TokenResponse = Self::parse_json(response, "login").await?;
        debug!("Login succeeded");

        Ok(SessionToken::new(auth.access_token))
    }

    /// Fetch the current user's point balance
    pub async fn fetch_points(&self, token: &SessionToken) -> Result<Points> {
        let url = self.url(CURRENT_USER_PATH);

        let response = self
            .client
            .get(&url)
            .bearer_auth(token.as_str())
            .send()
            .await
            .map_err(ApiError::from)
            .context("Failed to fetch current user")?;

        let response = Self::check_response(response).await?;

        let user: CurrentUserResponse = Self::parse_json(response, "current user").await?;
        let points = user.data.points;
        info!(points = %points, "Fetched current points");

        Ok(points)
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }

    async fn parse_json<T: DeserializeOwned>(response: reqwest::Response, what: &str) -> Result<T> {
        let text = response
            .text()
            .await
            .map_err(ApiError::from)
            .with_context(|| format!("Failed to read {} response body", what))?;

        serde_json::from_str(&text).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse {} response: {}", what, e)).into()
        })
    }
}
