//! # pay-core
//!
//! Foundational types shared across the payroll-rs workspace: the error
//! hierarchy, the `Result` alias, and the `ensure!` / `fail!` convenience
//! macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Calendar year (e.g. `2013`).
pub type Year = u16;

/// Day of the month (1–31).
pub type DayOfMonth = u8;

pub use errors::{Error, Result};
