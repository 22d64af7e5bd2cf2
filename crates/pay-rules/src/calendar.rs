//! `HolidayCalendar` — holiday bookkeeping plus the payday adjustment rules.
//!
//! The adjustment pipeline runs three stages in a fixed order:
//!
//! 1. **Weekend rule** — Saturday and Sunday candidates move back to the
//!    preceding Friday.
//! 2. **Holiday rule** — holiday dates are moved off the holiday, looping
//!    until the date is clear of the holiday set.
//! 3. **Range rule** — if the first two stages dragged the date into an
//!    earlier month (or year) than the candidate's, the result is discarded
//!    and the candidate is pushed forward to the next business day instead.
//!    A payday must never land before the month it was meant for.

use std::collections::HashSet;

use pay_time::{Date, Weekday};

/// An immutable set of public holidays with payday adjustment rules.
///
/// The holiday set is fixed at construction; a calendar can be shared
/// freely across generation runs.
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    holidays: HashSet<i32>,
}

impl HolidayCalendar {
    /// Create a calendar from a list of holiday dates.
    pub fn new(holidays: Vec<Date>) -> Self {
        Self {
            holidays: holidays.into_iter().map(|d| d.serial()).collect(),
        }
    }

    /// Create a calendar with no holidays (weekends only).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Return the number of holidays in the set.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }

    // ── Validity queries ─────────────────────────────────────────────────────

    /// Return `true` if `date` is in the holiday set.
    pub fn is_holiday(&self, date: Date) -> bool {
        self.holidays.contains(&date.serial())
    }

    /// Return `true` if `date` falls on a Saturday or Sunday.
    pub fn is_weekend(&self, date: Date) -> bool {
        date.is_weekend()
    }

    /// Return `true` if `date` is neither a weekend nor a holiday.
    pub fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    // ── Adjustment pipeline ──────────────────────────────────────────────────

    /// Compute the payday for a candidate date.
    ///
    /// Applies the weekend, holiday, and range rules in order. The result
    /// is always a business day no earlier (by month/year) than the
    /// candidate. Idempotent on its own output.
    pub fn adjust(&self, candidate: Date) -> Date {
        let calculated = self.apply_holiday_rule(self.apply_weekend_rule(candidate));
        self.apply_range_rule(candidate, calculated)
    }

    /// Weekend rule: Saturday moves back one day, Sunday two, both landing
    /// on the preceding Friday.
    pub fn apply_weekend_rule(&self, date: Date) -> Date {
        match date.weekday() {
            Weekday::Saturday => date - 1,
            Weekday::Sunday => date - 2,
            _ => date,
        }
    }

    /// Holiday rule: move the date off any holiday, looping until stable.
    ///
    /// A Monday–Thursday holiday jumps straight to the preceding Friday.
    /// A Friday/Saturday/Sunday holiday instead walks back day by day past
    /// weekends and holidays, which is what clears chained holidays such
    /// as Thanksgiving Thursday followed by Black Friday. The loop re-tests
    /// after every move, so a jump target that is itself a holiday gets
    /// resolved on the next pass. Bounded: holiday chains are at most a
    /// handful of days long.
    pub fn apply_holiday_rule(&self, mut date: Date) -> Date {
        while self.is_holiday(date) {
            let ordinal = date.weekday().ordinal() as i32;
            if (1..=4).contains(&ordinal) {
                date = date - (ordinal - 5).rem_euclid(7);
            } else {
                date = self.nearest_business_day_before(date);
            }
        }
        date
    }

    /// Walk backward one day at a time until a business day is found.
    ///
    /// Returns `date` itself when it is already a business day.
    pub fn nearest_business_day_before(&self, mut date: Date) -> Date {
        while !self.is_business_day(date) {
            date = date - 1;
        }
        date
    }

    /// Range rule: keep the payday from sliding into the month before the
    /// candidate's.
    ///
    /// When `calculated` precedes the candidate's month or year, the
    /// backward adjustment is discarded and the candidate is pushed
    /// forward to the next weekday instead (one more day if that weekday
    /// is a holiday).
    pub fn apply_range_rule(&self, candidate: Date, calculated: Date) -> Date {
        if !precedes_month(candidate, calculated) {
            return calculated;
        }
        let pushed = candidate
            + match candidate.weekday() {
                Weekday::Friday => 3,
                Weekday::Saturday => 2,
                _ => 1,
            };
        if self.is_holiday(pushed) {
            pushed + 1
        } else {
            pushed
        }
    }
}

/// Return `true` if `calculated` falls in an earlier month or year than
/// `candidate`.
pub fn precedes_month(candidate: Date, calculated: Date) -> bool {
    calculated.year() < candidate.year()
        || (calculated.year() == candidate.year() && calculated.month() < candidate.month())
}
