//! `PayFrequency` — the supported recurring pay cadences.

use std::str::FromStr;

use pay_core::errors::Error;

/// A recurring pay cadence.
///
/// Each frequency maps to a fixed day interval; the mapping is a lookup
/// table, not derived arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayFrequency {
    /// Every week (7 days), tag `"1 week"`.
    Weekly,
    /// Every other week (14 days), tag `"2 week"`.
    Biweekly,
    /// Every four weeks (28 days), tag `"4 week"`.
    FourWeekly,
    /// Every thirteen weeks (91 days), tag `"13 week"`.
    ThirteenWeekly,
}

impl PayFrequency {
    /// All supported frequencies, in tag order.
    pub const ALL: [PayFrequency; 4] = [
        PayFrequency::Weekly,
        PayFrequency::Biweekly,
        PayFrequency::FourWeekly,
        PayFrequency::ThirteenWeekly,
    ];

    /// The number of days between consecutive raw candidates.
    pub fn interval_days(&self) -> i32 {
        match self {
            PayFrequency::Weekly => 7,
            PayFrequency::Biweekly => 14,
            PayFrequency::FourWeekly => 28,
            PayFrequency::ThirteenWeekly => 91,
        }
    }

    /// The configuration tag for this frequency (`"1 week"`, …).
    pub fn tag(&self) -> &'static str {
        match self {
            PayFrequency::Weekly => "1 week",
            PayFrequency::Biweekly => "2 week",
            PayFrequency::FourWeekly => "4 week",
            PayFrequency::ThirteenWeekly => "13 week",
        }
    }
}

impl FromStr for PayFrequency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1 week" => Ok(PayFrequency::Weekly),
            "2 week" => Ok(PayFrequency::Biweekly),
            "4 week" => Ok(PayFrequency::FourWeekly),
            "13 week" => Ok(PayFrequency::ThirteenWeekly),
            other => Err(Error::InvalidArgument(format!(
                "unsupported pay frequency {other:?}"
            ))),
        }
    }
}

impl std::fmt::Display for PayFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}
