//! `PaydaySchedule` and the schedule generator.
//!
//! The generator proposes raw candidate dates (one per calendar month, or
//! a fixed-interval cadence from a starting date), runs each through the
//! calendar's adjustment pipeline, and collects the results in order.
//! Candidates always advance from the *raw* cursor, never from an adjusted
//! date, so one adjustment cannot drift the whole cadence.

use pay_core::errors::Result;
use pay_core::{ensure, DayOfMonth, Year};
use pay_rules::HolidayCalendar;
use pay_time::Date;

use crate::frequency::PayFrequency;
use crate::presenter::Presenter;

/// The fixed message reported when a frequency tag is not supported.
pub const FREQUENCY_OPTIONS_MESSAGE: &str =
    "Please enter a valid pay frequency.\nOptions : 1 week, 2 week, 4 week, 13 week";

/// One generation run's worth of input.
///
/// Exactly one mode is active per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleRequest {
    /// One payday per calendar month of `year`, proposed on `day_of_month`
    /// (clamped to the month's last day where needed).
    Monthly {
        /// The year to schedule.
        year: Year,
        /// The proposed day of each month (1–31).
        day_of_month: DayOfMonth,
    },
    /// Recurring paydays every `frequency` interval from `start_date`,
    /// bounded by the end of the starting year.
    Frequency {
        /// The date the cadence counts from (not itself a payday).
        start_date: Date,
        /// The recurring cadence.
        frequency: PayFrequency,
    },
}

/// An ordered sequence of paydays produced by one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaydaySchedule {
    dates: Vec<Date>,
}

impl PaydaySchedule {
    /// Build a schedule from an explicit list of dates.
    pub fn from_dates(dates: Vec<Date>) -> Self {
        Self { dates }
    }

    /// All paydays in generation order.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Number of paydays.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Return `true` if the run produced no paydays.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Iterate over the paydays in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Date> {
        self.dates.iter()
    }
}

impl IntoIterator for PaydaySchedule {
    type Item = Date;
    type IntoIter = std::vec::IntoIter<Date>;

    fn into_iter(self) -> Self::IntoIter {
        self.dates.into_iter()
    }
}

/// Drives the payday rules across a generation strategy.
///
/// Every generation call returns a fresh [`PaydaySchedule`]; no state
/// accumulates on the generator between runs.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleGenerator<'a> {
    calendar: &'a HolidayCalendar,
}

impl<'a> ScheduleGenerator<'a> {
    /// Create a generator over the given holiday calendar.
    pub fn new(calendar: &'a HolidayCalendar) -> Self {
        Self { calendar }
    }

    /// Generate the schedule for a request, emitting each payday through
    /// the presenter as it is produced.
    pub fn generate(
        &self,
        request: ScheduleRequest,
        presenter: &mut dyn Presenter,
    ) -> Result<PaydaySchedule> {
        match request {
            ScheduleRequest::Monthly { year, day_of_month } => {
                self.generate_monthly(year, day_of_month, presenter)
            }
            ScheduleRequest::Frequency {
                start_date,
                frequency,
            } => self.generate_frequency(start_date, frequency, presenter),
        }
    }

    /// One payday per calendar month of `year`.
    ///
    /// The candidate for each month is `day_of_month`, clamped to the last
    /// day of the month when it does not exist (day 31 in February becomes
    /// February 28/29). Always produces twelve entries.
    pub fn generate_monthly(
        &self,
        year: Year,
        day_of_month: DayOfMonth,
        presenter: &mut dyn Presenter,
    ) -> Result<PaydaySchedule> {
        ensure!(
            (1..=31).contains(&day_of_month),
            "day of month {day_of_month} out of range [1, 31]"
        );
        let mut dates = Vec::with_capacity(12);
        for month in 1..=12u8 {
            let candidate = Date::from_ymd_clamped(year, month, day_of_month)?;
            let payday = self.calendar.adjust(candidate);
            presenter.write_payday(payday);
            dates.push(payday);
        }
        Ok(PaydaySchedule::from_dates(dates))
    }

    /// Recurring paydays from `start_date`, bounded by the starting year.
    ///
    /// The raw cursor advances by the frequency interval before each
    /// adjustment; the bound is December 31 of the *starting* year and
    /// never rebinds as the cursor advances. An adjusted date past that
    /// bound ends the run without being appended — which still admits a
    /// final catch-up payday pulled back to the year's last business day
    /// when the raw cadence overshoots into January.
    pub fn generate_frequency(
        &self,
        start_date: Date,
        frequency: PayFrequency,
        presenter: &mut dyn Presenter,
    ) -> Result<PaydaySchedule> {
        let year_end = start_date.end_of_year();
        let mut cursor = start_date;
        let mut dates = Vec::new();
        while cursor <= year_end {
            cursor = cursor.add_days(frequency.interval_days())?;
            let payday = self.calendar.adjust(cursor);
            if payday > year_end {
                break;
            }
            presenter.write_payday(payday);
            dates.push(payday);
        }
        Ok(PaydaySchedule::from_dates(dates))
    }

    /// Generate from a raw frequency tag.
    ///
    /// An unsupported tag reports [`FREQUENCY_OPTIONS_MESSAGE`] once on
    /// the plain-text channel and yields an empty schedule.
    pub fn generate_for_tag(
        &self,
        tag: &str,
        start_date: Date,
        presenter: &mut dyn Presenter,
    ) -> Result<PaydaySchedule> {
        match tag.parse::<PayFrequency>() {
            Ok(frequency) => self.generate_frequency(start_date, frequency, presenter),
            Err(_) => {
                presenter.write_line(FREQUENCY_OPTIONS_MESSAGE);
                Ok(PaydaySchedule::default())
            }
        }
    }
}
