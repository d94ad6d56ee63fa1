use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::FetchError;

/// Supported history granularities.
///
/// Each variant carries the `interval_sec` code the AJAX backend
/// expects and a cadence label used for naming output files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interval {
    Daily,
    Weekly,
    Monthly,
}

impl Interval {
    pub const ALL: [Self; 3] = [Self::Daily, Self::Weekly, Self::Monthly];

    /// Granularity code sent as the `interval_sec` form field.
    pub const fn granularity(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }

    /// Label for output-file naming and partitioning.
    pub const fn cadence(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.cadence())
    }
}

impl FromStr for Interval {
    type Err = FetchError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            other => Err(FetchError::InvalidInterval {
                value: other.to_owned(),
            }),
        }
    }
}
