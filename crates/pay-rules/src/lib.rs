//! # pay-rules
//!
//! The payday rule engine: a [`HolidayCalendar`] holding an immutable set
//! of public holidays, with the adjustment pipeline that moves a candidate
//! payment date off weekends and holidays while keeping it inside (or
//! pushing it forward from) its intended calendar month.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `HolidayCalendar` and the payday adjustment rules.
pub mod calendar;

/// Loading holiday dates from a JSON source file.
pub mod source;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::HolidayCalendar;
pub use source::{load_holidays, load_holidays_or_empty, parse_holidays};
