//! Calendar clock: the only place the demo reads "today".

use chrono::{Local, NaiveDate};

/// Date format used in the report header and the CSV export.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the local calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stopped on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
