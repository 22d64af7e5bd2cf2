//! Loading public holidays from a JSON source file.
//!
//! The expected shape is a top-level object with a `public_holidays` array
//! of records, each carrying a parseable `date` string:
//!
//! ```json
//! { "public_holidays": [ { "date": "2013-01-01" }, { "date": "2013-05-27" } ] }
//! ```
//!
//! Extra keys on the records (holiday names and the like) are ignored.

use std::fs;
use std::path::Path;

use pay_core::errors::{Error, Result};
use pay_core::fail;
use pay_time::Date;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct HolidayFile {
    public_holidays: Vec<HolidayRecord>,
}

#[derive(Debug, Deserialize)]
struct HolidayRecord {
    date: String,
}

/// Parse holiday dates out of a JSON document.
pub fn parse_holidays(json: &str) -> Result<Vec<Date>> {
    let file: HolidayFile = serde_json::from_str(json)
        .map_err(|e| Error::Parse(format!("invalid holiday file: {e}")))?;
    file.public_holidays
        .iter()
        .map(|record| Date::parse(&record.date))
        .collect()
}

/// Read and parse a holiday file.
///
/// # Errors
/// Returns an error if the file cannot be read, is not valid JSON of the
/// expected shape, or contains an unparseable date.
pub fn load_holidays(path: &Path) -> Result<Vec<Date>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => fail!("cannot read holiday file {}: {e}", path.display()),
    };
    parse_holidays(&text)
}

/// Load holidays, recovering to an empty list when no usable source exists.
///
/// `None`, a missing file, and an unreadable or malformed file all yield
/// an empty list; scheduling then proceeds with weekend rules only.
pub fn load_holidays_or_empty(path: Option<&Path>) -> Vec<Date> {
    match path {
        Some(p) => load_holidays(p).unwrap_or_default(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "public_holidays": [
            { "date": "2013-01-01", "name": "New Year's Day" },
            { "date": "2013-05-27", "name": "Memorial Day" }
        ]
    }"#;

    #[test]
    fn parses_dates_and_ignores_names() {
        let holidays = parse_holidays(SAMPLE).unwrap();
        assert_eq!(
            holidays,
            vec![
                Date::from_ymd(2013, 1, 1).unwrap(),
                Date::from_ymd(2013, 5, 27).unwrap(),
            ]
        );
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(parse_holidays("not json"), Err(Error::Parse(_))));
        assert!(matches!(parse_holidays("{}"), Err(Error::Parse(_))));
    }

    #[test]
    fn rejects_bad_dates() {
        let json = r#"{ "public_holidays": [ { "date": "2013-02-30" } ] }"#;
        assert!(parse_holidays(json).is_err());
    }

    #[test]
    fn missing_source_recovers_to_empty() {
        assert!(load_holidays_or_empty(None).is_empty());
        assert!(load_holidays_or_empty(Some(Path::new("/no/such/file.json"))).is_empty());
    }
}
