//! `Date` — a naive calendar date.
//!
//! Dates are stored as a serial day count with serial 1 = January 1, 1900.
//! The valid range is 1900-01-01 to 2199-12-31, which comfortably covers
//! any payroll year anyone will schedule.

use crate::month::Month;
use crate::weekday::Weekday;
use pay_core::errors::{Error, Result};

/// A calendar date represented as a serial day number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

impl Date {
    /// Minimum valid date: January 1, 1900 (serial 1).
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    ///
    /// Returns an error if any component is out of range or if the day does
    /// not exist in the given month (e.g. February 30).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1900..=2199).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1900, 2199]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let last = days_in_month(year, month);
        if day == 0 || day > last {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {last}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Create a date from year, month, and day, clamping the day to the last
    /// day of the month when it exceeds it.
    ///
    /// `from_ymd_clamped(2014, 2, 30)` gives 2014-02-28; a day that exists
    /// in the month is returned unchanged. Year, month, and a non-zero day
    /// are still validated.
    pub fn from_ymd_clamped(year: u16, month: u8, day: u8) -> Result<Self> {
        if day == 0 {
            return Err(Error::Date(format!("day {day} out of range [1, 31]")));
        }
        if (1..=12).contains(&month) {
            let last = days_in_month(year, month);
            if day > last {
                return Date::from_ymd(year, month, last);
            }
        }
        Date::from_ymd(year, month, day)
    }

    /// Parse a date from a `year-month-day` or `year/month/day` string.
    ///
    /// Accepts both zero-padded and bare components (`"2013-10-05"` and
    /// `"2013/10/5"` both parse to the same date).
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let sep = if trimmed.contains('/') { '/' } else { '-' };
        let parts: Vec<&str> = trimmed.split(sep).collect();
        if parts.len() != 3 {
            return Err(Error::Parse(format!(
                "expected a year{sep}month{sep}day date, got {text:?}"
            )));
        }
        let year: u16 = parts[0]
            .parse()
            .map_err(|_| Error::Parse(format!("invalid year in {text:?}")))?;
        let month: u8 = parts[1]
            .parse()
            .map_err(|_| Error::Parse(format!("invalid month in {text:?}")))?;
        let day: u8 = parts[2]
            .parse()
            .map_err(|_| Error::Parse(format!("invalid day in {text:?}")))?;
        Date::from_ymd(year, month, day)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial day number (1 = 1900-01-01).
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month number (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        Month::from_number(self.month()).expect("month always in 1..=12")
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 1 (1900-01-01) was a Monday.
        let wd = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(wd).expect("rem_euclid always in 1..=7")
    }

    /// Return `true` if this date falls on a Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        self.weekday().is_weekend()
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days (negative `n` moves backward).
    ///
    /// Returns an error if the result is outside the valid date range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0 + n;
        if !(Self::MIN.0..=Self::MAX.0).contains(&serial) {
            return Err(Error::Date(format!(
                "date arithmetic: serial {serial} out of range"
            )));
        }
        Ok(Date(serial))
    }

    /// Return the number of calendar days from `self` to `other`.
    /// Positive if `other` is later.
    pub fn days_until(self, other: Date) -> i32 {
        other.0 - self.0
    }

    // ── Month / year boundaries ──────────────────────────────────────────────

    /// Return the last calendar day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, days_in_month(y, m)))
    }

    /// Return `true` if this is the last calendar day of its month.
    pub fn is_end_of_month(self) -> bool {
        self == self.end_of_month()
    }

    /// Return December 31 of the year containing this date.
    pub fn end_of_year(self) -> Self {
        Date(serial_from_ymd(self.year(), 12, 31))
    }

    /// Return December 31 of the given year.
    pub fn year_end(year: u16) -> Result<Self> {
        Date::from_ymd(year, 12, 31)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = self.add_days(rhs).expect("date addition overflow");
    }
}

impl std::ops::SubAssign<i32> for Date {
    fn sub_assign(&mut self, rhs: i32) {
        *self = self.add_days(-rhs).expect("date subtraction underflow");
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Calendar helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Cumulative days at the start of each month in a non-leap year.
const MONTH_START: [i32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Leap years in `[1900, year)`.
fn leap_years_before(year: u16) -> i32 {
    let count = |y: i32| y / 4 - y / 100 + y / 400;
    count(year as i32 - 1) - count(1899)
}

/// Convert (year, month, day) to a serial number (1 = 1900-01-01).
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let mut serial = (year as i32 - 1900) * 365 + leap_years_before(year);
    serial += MONTH_START[month as usize - 1];
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    // Underestimate the year, then walk forward; the guess is off by at
    // most one or two years across the whole valid range.
    let mut year = (1900 + (serial - 1) / 366) as u16;
    while serial_from_ymd(year + 1, 1, 1) <= serial {
        year += 1;
    }
    let mut day_of_year = serial - serial_from_ymd(year, 1, 1) + 1;
    let mut month = 1u8;
    while day_of_year > days_in_month(year, month) as i32 {
        day_of_year -= days_in_month(year, month) as i32;
        month += 1;
    }
    (year, month, day_of_year as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
