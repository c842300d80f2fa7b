//! Date source for the "Last Update Date" column

use chrono::{Local, NaiveDate};

/// Format used for the date column
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub trait Clock {
    /// Current calendar date
    fn today(&self) -> NaiveDate;

    /// Current date rendered as `YYYY-MM-DD`
    fn today_string(&self) -> String {
        self.today().format(DATE_FORMAT).to_string()
    }
}

/// Local wall clock of the host
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
