//! Error types for payroll-rs.
//!
//! All fallible operations in the workspace report through a single
//! `thiserror`-derived enum. The payloads are plain `String`s so the enum
//! stays `Clone + PartialEq`, which keeps it cheap to assert on in tests.

use thiserror::Error;

/// The top-level error type used throughout payroll-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Date-related error (out-of-range components, arithmetic overflow).
    #[error("date error: {0}")]
    Date(String),

    /// A string could not be parsed into a domain value.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout payroll-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use pay_core::ensure;
/// fn day_of_month(d: u8) -> pay_core::Result<u8> {
///     ensure!((1..=31).contains(&d), "day {d} out of range [1, 31]");
///     Ok(d)
/// }
/// assert!(day_of_month(15).is_ok());
/// assert!(day_of_month(32).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use pay_core::fail;
/// fn always_err() -> pay_core::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = Error::Date("year 1800 out of range".into());
        assert_eq!(e.to_string(), "date error: year 1800 out of range");
        let e = Error::Parse("bad date string".into());
        assert_eq!(e.to_string(), "parse error: bad date string");
    }

    #[test]
    fn ensure_macro() {
        fn check(x: i32) -> Result<i32> {
            ensure!(x > 0, "x must be positive, got {x}");
            Ok(x)
        }
        assert_eq!(check(3), Ok(3));
        assert!(matches!(check(-1), Err(Error::InvalidArgument(_))));
    }
}
