// System clock adapter - Local calendar date

use chrono::{Local, NaiveDate};

use crate::ports::ClockPort;

/// Reads the date from the local timezone
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClockAdapter;

impl ClockPort for SystemClockAdapter {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date
#[derive(Debug, Clone, Copy)]
pub struct FixedClockAdapter {
    date: NaiveDate,
}

impl FixedClockAdapter {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl ClockPort for FixedClockAdapter {
    fn today(&self) -> NaiveDate {
        self.date
    }
}
