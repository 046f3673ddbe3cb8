use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A point balance as reported by the API.
///
/// Wraps the raw JSON number so integer and decimal balances are displayed
/// exactly as the server sent them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Points(Number);

impl From<i64> for Points {
    fn from(value: i64) -> Self {
        Self(Number::from(value))
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Response body of the password-grant login endpoint
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Response body of `GET /rest-api/v1/users/me`.
/// Only the fields needed to read the balance are modelled.
#[derive(Debug, Deserialize)]
pub struct CurrentUserResponse {
    #[serde(rename = "_data")]
    pub data: CurrentUserData,
}

#[derive(Debug, Deserialize)]
pub struct CurrentUserData {
    pub points: Points,
}
