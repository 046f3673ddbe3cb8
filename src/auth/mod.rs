//! Authentication types for the password-grant login.
//!
//! This module provides:
//! - `Credentials`: client and user credentials sent to the login endpoint
//! - `SessionToken`: the bearer token returned for the current run
//!
//! Tokens live only for one process execution and are never written to disk.

pub mod credentials;
pub mod session;

pub use credentials::Credentials;
pub use session::SessionToken;
