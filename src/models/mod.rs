//! Data models for the points API.
//!
//! - `Points`: the user's balance, kept exactly as the server reported it
//! - `TokenResponse`, `CurrentUserResponse`: wire shapes of the two endpoints

pub mod points;

pub use points::{CurrentUserResponse, Points, TokenResponse};
