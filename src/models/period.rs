//! Report period model
//!
//! A period is a named lookback window used to bound report queries.
//! Lookbacks are fixed calendar-day offsets: a "month" is 30 days, not a
//! calendar month, matching the report semantics of the data this tool
//! is meant to reproduce.

use chrono::{Duration, NaiveDate};
use std::fmt;

/// A named lookback window for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    /// Last 7 days
    Week,
    /// Last 30 days
    #[default]
    Month,
    /// Last 365 days
    Year,
    /// No lower bound (all history)
    All,
}

impl Period {
    /// Number of days covered by this period, if bounded
    pub fn days(&self) -> Option<i64> {
        match self {
            Self::Week => Some(7),
            Self::Month => Some(30),
            Self::Year => Some(365),
            Self::All => None,
        }
    }

    /// The start date of this period counting back from `today`,
    /// or `None` for unbounded history
    pub fn start_from(&self, today: NaiveDate) -> Option<NaiveDate> {
        self.days().map(|d| today - Duration::days(d))
    }
}

impl From<&str> for Period {
    /// Unrecognized tags mean "all history" rather than an error
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "week" => Self::Week,
            "month" => Self::Month,
            "year" => Self::Year,
            _ => Self::All,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Week => write!(f, "week"),
            Self::Month => write!(f, "month"),
            Self::Year => write!(f, "year"),
            Self::All => write!(f, "all"),
        }
    }
}
