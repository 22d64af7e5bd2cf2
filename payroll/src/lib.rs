//! # payroll
//!
//! Payroll payment-date scheduling: compute the paydays for a year from
//! either a fixed day-of-month or a recurring frequency, adjusting each
//! candidate off weekends and public holidays while keeping it within its
//! intended calendar month.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `pay-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use payroll::rules::HolidayCalendar;
//! use payroll::schedule::{MemoryPresenter, ScheduleGenerator};
//! use payroll::time::Date;
//!
//! let calendar = HolidayCalendar::new(vec![Date::from_ymd(2013, 1, 1).unwrap()]);
//! let generator = ScheduleGenerator::new(&calendar);
//! let mut presenter = MemoryPresenter::new();
//!
//! let schedule = generator.generate_monthly(2013, 1, &mut presenter).unwrap();
//! assert_eq!(schedule.len(), 12);
//! // New Year's Day pushes the January payday forward to the 2nd
//! assert_eq!(schedule.dates()[0], Date::from_ymd(2013, 1, 2).unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and shared aliases.
pub use pay_core as core;

/// Calendar date, weekday, and month value types.
pub use pay_time as time;

/// Holiday calendar and payday adjustment rules.
pub use pay_rules as rules;

/// Schedule generation, frequencies, and presentation.
pub use pay_schedule as schedule;
