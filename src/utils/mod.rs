//! Utility functions for rendering message fields.

pub mod timestamp;

pub use timestamp::{FormattedTimestamp, TimestampStyle};
