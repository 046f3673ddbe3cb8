//! Rendering of the run's start time for the outgoing message.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeZone};

/// A rendered time-of-day and calendar date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedTimestamp {
    pub time: String,
    pub date: String,
}

/// How the start time is rendered in the notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimestampStyle {
    /// `2:05 PM` and `2024-06-01`
    #[default]
    Compact,
    /// en-US locale strings: `02:05 PM` and `6/1/2024`
    Locale,
}

impl TimestampStyle {
    fn time_pattern(self) -> &'static str {
        match self {
            TimestampStyle::Compact => "%-I:%M %p",
            TimestampStyle::Locale => "%I:%M %p",
        }
    }

    fn date_pattern(self) -> &'static str {
        match self {
            TimestampStyle::Compact => "%Y-%m-%d",
            TimestampStyle::Locale => "%-m/%-d/%Y",
        }
    }

    /// Render `at` in its own time zone
    pub fn format<Tz>(self, at: &DateTime<Tz>) -> FormattedTimestamp
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        FormattedTimestamp {
            time: at.format(self.time_pattern()).to_string(),
            date: at.format(self.date_pattern()).to_string(),
        }
    }
}

impl FromStr for TimestampStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(TimestampStyle::Compact),
            "locale" => Ok(TimestampStyle::Locale),
            other => Err(format!("unknown timestamp style '{}'", other)),
        }
    }
}
