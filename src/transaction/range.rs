//! Time-range presets used by the dashboard.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::{Date, Duration};

use crate::Error;

use super::core::Transaction;

/// Number of days, including today, covered by [TimeRange::Week].
const WEEK_LENGTH_DAYS: i64 = 7;

/// The period of time a dashboard summarises.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeRange {
    /// Every transaction.
    #[default]
    All,
    /// Transactions in the same calendar month and year as today.
    Month,
    /// Transactions from the last seven days, today included.
    ///
    /// There is no upper bound, so transactions dated after today are kept.
    Week,
}

impl TimeRange {
    /// The kebab-case name of the range.
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Month => "month",
            Self::Week => "week",
        }
    }

    /// Whether a transaction dated `date` falls in this range relative to `today`.
    pub fn contains(self, date: Date, today: Date) -> bool {
        match self {
            Self::All => true,
            // Month and year are compared independently.
            Self::Month => date.month() == today.month() && date.year() == today.year(),
            Self::Week => date >= week_start(today),
        }
    }
}

impl FromStr for TimeRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "month" => Ok(Self::Month),
            "week" => Ok(Self::Week),
            other => Err(Error::InvalidOption(other.to_owned())),
        }
    }
}

impl Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_query_value())
    }
}

/// Keep the transactions that fall in `range` relative to `today`, keeping their order.
pub fn filter_by_time_range(
    transactions: &[Transaction],
    range: TimeRange,
    today: Date,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|transaction| range.contains(transaction.date, today))
        .cloned()
        .collect()
}

fn week_start(today: Date) -> Date {
    today
        .checked_sub(Duration::days(WEEK_LENGTH_DAYS - 1))
        .unwrap_or(Date::MIN)
}
