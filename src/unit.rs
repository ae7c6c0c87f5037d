use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MilestoneError;

const SECOND_MS: i64 = 1_000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const DAY_MS: i64 = 86_400_000;
const WEEK_MS: i64 = 7 * DAY_MS;

/// A unit in which elapsed time and milestones are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Years,
    Months,
    Weeks,
    Days,
    Minutes,
    Seconds,
}

impl Unit {
    /// Canonical display order.
    pub const ALL: [Unit; 6] = [
        Unit::Years,
        Unit::Months,
        Unit::Weeks,
        Unit::Days,
        Unit::Minutes,
        Unit::Seconds,
    ];

    /// Length of one unit in milliseconds, or `None` for calendar units
    /// whose length depends on where they fall.
    pub fn fixed_millis(self) -> Option<i64> {
        match self {
            Unit::Years | Unit::Months => None,
            Unit::Weeks => Some(WEEK_MS),
            Unit::Days => Some(DAY_MS),
            Unit::Minutes => Some(MINUTE_MS),
            Unit::Seconds => Some(SECOND_MS),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Years => "years",
            Unit::Months => "months",
            Unit::Weeks => "weeks",
            Unit::Days => "days",
            Unit::Minutes => "minutes",
            Unit::Seconds => "seconds",
        }
    }

    /// English label for `count` of this unit ("1 year", "2 years").
    pub fn label(self, count: i64) -> &'static str {
        let plural = self.as_str();
        if count.abs() == 1 {
            &plural[..plural.len() - 1]
        } else {
            plural
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = MilestoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Unit::ALL
            .into_iter()
            .find(|u| {
                let plural = u.as_str();
                name == plural || name == plural[..plural.len() - 1]
            })
            .ok_or_else(|| MilestoneError::UnknownUnit(s.to_string()))
    }
}
