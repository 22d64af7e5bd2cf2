//! # pay-schedule
//!
//! Schedule generation: drives the payday rules across either one
//! candidate per calendar month for a year, or a fixed-interval cadence
//! from a starting date, emitting each payday through a [`Presenter`] as
//! it is produced.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `PayFrequency` — the supported recurring cadences.
pub mod frequency;

/// Output channel for generated paydays and status messages.
pub mod presenter;

/// `PaydaySchedule` and the schedule generator.
pub mod schedule;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use frequency::PayFrequency;
pub use presenter::{format_payday, ConsolePresenter, MemoryPresenter, Presenter};
pub use schedule::{
    PaydaySchedule, ScheduleGenerator, ScheduleRequest, FREQUENCY_OPTIONS_MESSAGE,
};
