//! REST API client module for the points service.
//!
//! This module provides the `ApiClient` for logging in with a password
//! grant and reading the current user's point balance.
//!
//! The API uses bearer token authentication obtained through the
//! `/rest-api/oauth/access_token` endpoint.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
