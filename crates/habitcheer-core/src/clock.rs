//! Calendar date source.
//!
//! Progress messages are stable per local calendar day, so the selector needs
//! "today". Reading it through [`Clock`] lets tests pin the date.

use chrono::{Local, NaiveDate};

/// Supplies the current local calendar date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
