use chrono::{Local, NaiveDate};

use crate::error::FetchError;
use crate::interval::Interval;

/// Inclusive date range plus granularity for one fetch.
#[derive(Debug, Clone, Copy)]
pub struct FetchRequest {
    start: NaiveDate,
    end: NaiveDate,
    interval: Interval,
}

impl FetchRequest {
    /// Fails with a configuration error when `start > end`; this is
    /// checked before any network I/O happens.
    pub fn new(start: NaiveDate, end: NaiveDate, interval: Interval) -> Result<Self, FetchError> {
        if start > end {
            return Err(FetchError::config(format!(
                "start date {} is after end date {}",
                start, end
            )));
        }
        Ok(Self {
            start,
            end,
            interval,
        })
    }

    /// Full available history: 1900-01-01 through today.
    pub fn through_today(interval: Interval) -> Self {
        Self {
            start: Self::default_start(),
            end: Local::now().date_naive(),
            interval,
        }
    }

    pub fn default_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(1900, 1, 1).unwrap()
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }
}
