//! # pay-time
//!
//! Calendar value types: `Date`, `Weekday`, and `Month`.
//!
//! Dates are naive calendar dates — no timezone, no time of day. They are
//! stored as a serial day count, which makes comparison, day arithmetic,
//! and weekday derivation trivial.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// `Month` — month of the year.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use month::Month;
pub use weekday::Weekday;
