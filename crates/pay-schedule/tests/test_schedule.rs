//! End-to-end schedule generation against the 2013 US holiday calendar.
//!
//! The expected grids cover a full year per run: six monthly runs with
//! different days of the month, the four supported frequencies, and the
//! unsupported-frequency error path.

use pay_rules::HolidayCalendar;
use pay_schedule::{
    format_payday, MemoryPresenter, PayFrequency, ScheduleGenerator, ScheduleRequest,
    FREQUENCY_OPTIONS_MESSAGE,
};
use pay_time::Date;
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn us_holidays_2013() -> Vec<Date> {
    vec![
        date(2013, 1, 1),   // New Year's Day (Tuesday)
        date(2013, 1, 21),  // Martin Luther King Jr. Day (Monday)
        date(2013, 2, 18),  // Presidents' Day (Monday)
        date(2013, 5, 27),  // Memorial Day (Monday)
        date(2013, 7, 4),   // Independence Day (Thursday)
        date(2013, 9, 2),   // Labor Day (Monday)
        date(2013, 10, 4),  // Columbus Day, observed (Friday)
        date(2013, 11, 11), // Veterans Day (Monday)
        date(2013, 11, 28), // Thanksgiving (Thursday)
        date(2013, 11, 29), // Black Friday
        date(2013, 12, 25), // Christmas Day (Wednesday)
    ]
}

fn expect_monthly(day_of_month: u8, expected: [&str; 12]) {
    let cal = HolidayCalendar::new(us_holidays_2013());
    let gen = ScheduleGenerator::new(&cal);
    let mut out = MemoryPresenter::new();
    let schedule = gen.generate_monthly(2013, day_of_month, &mut out).unwrap();
    let expected: Vec<Date> = expected.iter().map(|s| Date::parse(s).unwrap()).collect();
    assert_eq!(schedule.dates(), expected, "monthly day {day_of_month}");
    assert_eq!(out.lines().len(), 12);
}

fn expect_frequency(tag: &str, start: &str, expected: &[&str]) {
    let cal = HolidayCalendar::new(us_holidays_2013());
    let gen = ScheduleGenerator::new(&cal);
    let mut out = MemoryPresenter::new();
    let schedule = gen
        .generate_for_tag(tag, Date::parse(start).unwrap(), &mut out)
        .unwrap();
    let expected: Vec<Date> = expected.iter().map(|s| Date::parse(s).unwrap()).collect();
    assert_eq!(schedule.dates(), expected, "{tag} from {start}");
    assert_eq!(out.lines().len(), expected.len());
}

// ─── Monthly mode ─────────────────────────────────────────────────────────────

#[test]
fn monthly_on_the_1st() {
    expect_monthly(
        1,
        [
            "2013-01-02", "2013-02-01", "2013-03-01", "2013-04-01", "2013-05-01", "2013-06-03",
            "2013-07-01", "2013-08-01", "2013-09-03", "2013-10-01", "2013-11-01", "2013-12-02",
        ],
    );
}

#[test]
fn monthly_on_the_2nd() {
    expect_monthly(
        2,
        [
            "2013-01-02", "2013-02-01", "2013-03-01", "2013-04-02", "2013-05-02", "2013-06-03",
            "2013-07-02", "2013-08-02", "2013-09-03", "2013-10-02", "2013-11-01", "2013-12-02",
        ],
    );
}

#[test]
fn monthly_on_the_7th() {
    expect_monthly(
        7,
        [
            "2013-01-07", "2013-02-07", "2013-03-07", "2013-04-05", "2013-05-07", "2013-06-07",
            "2013-07-05", "2013-08-07", "2013-09-06", "2013-10-07", "2013-11-07", "2013-12-06",
        ],
    );
}

#[test]
fn monthly_on_the_25th() {
    expect_monthly(
        25,
        [
            "2013-01-25", "2013-02-25", "2013-03-25", "2013-04-25", "2013-05-24", "2013-06-25",
            "2013-07-25", "2013-08-23", "2013-09-25", "2013-10-25", "2013-11-25", "2013-12-20",
        ],
    );
}

#[test]
fn monthly_on_the_29th() {
    expect_monthly(
        29,
        [
            "2013-01-29", "2013-02-28", "2013-03-29", "2013-04-29", "2013-05-29", "2013-06-28",
            "2013-07-29", "2013-08-29", "2013-09-27", "2013-10-29", "2013-11-27", "2013-12-27",
        ],
    );
}

#[test]
fn monthly_on_the_31st() {
    expect_monthly(
        31,
        [
            "2013-01-31", "2013-02-28", "2013-03-29", "2013-04-30", "2013-05-31", "2013-06-28",
            "2013-07-31", "2013-08-30", "2013-09-30", "2013-10-31", "2013-11-27", "2013-12-31",
        ],
    );
}

// ─── Frequency mode ───────────────────────────────────────────────────────────

#[test]
fn weekly_from_october_5th() {
    expect_frequency(
        "1 week",
        "2013/10/5",
        &[
            "2013-10-11", "2013-10-18", "2013-10-25", "2013-11-01", "2013-11-08", "2013-11-15",
            "2013-11-22", "2013-11-27", "2013-12-06", "2013-12-13", "2013-12-20", "2013-12-27",
        ],
    );
}

#[test]
fn weekly_from_september_25th() {
    expect_frequency(
        "1 week",
        "2013/9/25",
        &[
            "2013-10-02", "2013-10-09", "2013-10-16", "2013-10-23", "2013-10-30", "2013-11-06",
            "2013-11-13", "2013-11-20", "2013-11-27", "2013-12-04", "2013-12-11", "2013-12-18",
            "2013-12-20",
        ],
    );
}

#[test]
fn biweekly_from_october_5th() {
    expect_frequency(
        "2 week",
        "2013/10/5",
        &[
            "2013-10-18", "2013-11-01", "2013-11-15", "2013-11-27", "2013-12-13", "2013-12-27",
        ],
    );
}

#[test]
fn four_weekly_from_new_years_day() {
    expect_frequency(
        "4 week",
        "2013/1/1",
        &[
            "2013-01-29", "2013-02-26", "2013-03-26", "2013-04-23", "2013-05-21", "2013-06-18",
            "2013-07-16", "2013-08-13", "2013-09-10", "2013-10-08", "2013-11-05", "2013-12-03",
            "2013-12-31",
        ],
    );
}

#[test]
fn thirteen_weekly_from_new_years_day() {
    expect_frequency(
        "13 week",
        "2013/1/1",
        &["2013-04-02", "2013-07-02", "2013-10-01", "2013-12-31"],
    );
}

#[test]
fn unsupported_frequency_reports_the_options() {
    let cal = HolidayCalendar::new(us_holidays_2013());
    let gen = ScheduleGenerator::new(&cal);
    let mut out = MemoryPresenter::new();
    let schedule = gen
        .generate_for_tag("5 week", date(2013, 1, 1), &mut out)
        .unwrap();
    assert!(schedule.is_empty());
    assert_eq!(out.lines(), [FREQUENCY_OPTIONS_MESSAGE]);
}

// ─── Presenter output ─────────────────────────────────────────────────────────

#[test]
fn emits_formatted_paydays_in_order() {
    let cal = HolidayCalendar::new(us_holidays_2013());
    let gen = ScheduleGenerator::new(&cal);
    let mut out = MemoryPresenter::new();
    gen.generate(
        ScheduleRequest::Frequency {
            start_date: date(2013, 10, 5),
            frequency: PayFrequency::Weekly,
        },
        &mut out,
    )
    .unwrap();
    assert_eq!(out.lines()[0], "Friday, October 11, 2013");
    assert_eq!(out.lines()[7], "Wednesday, November 27, 2013");
    assert_eq!(out.lines().last().unwrap(), "Friday, December 27, 2013");
}

// ─── Properties ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn monthly_runs_always_produce_twelve_valid_paydays(
        year in 1901u16..=2198,
        day in 1u8..=31,
    ) {
        let cal = HolidayCalendar::new(us_holidays_2013());
        let gen = ScheduleGenerator::new(&cal);
        let mut out = MemoryPresenter::new();
        let schedule = gen.generate_monthly(year, day, &mut out).unwrap();
        prop_assert_eq!(schedule.len(), 12);
        for (i, &payday) in schedule.iter().enumerate() {
            let month = i as u8 + 1;
            prop_assert!(cal.is_business_day(payday), "{payday} is not a business day");
            // Never earlier than the candidate's month
            prop_assert!(
                payday.year() > year
                    || (payday.year() == year && payday.month() >= month),
                "{payday} precedes month {year}-{month:02}"
            );
        }
        prop_assert_eq!(out.lines().len(), 12);
    }

    #[test]
    fn frequency_runs_never_pass_year_end(
        offset in 0i32..364,
        freq_index in 0usize..4,
    ) {
        let cal = HolidayCalendar::new(us_holidays_2013());
        let gen = ScheduleGenerator::new(&cal);
        let mut out = MemoryPresenter::new();
        let start = date(2013, 1, 1) + offset;
        let frequency = PayFrequency::ALL[freq_index];
        let schedule = gen.generate_frequency(start, frequency, &mut out).unwrap();
        let year_end = date(2013, 12, 31);
        for &payday in schedule.iter() {
            prop_assert!(payday <= year_end);
            prop_assert!(cal.is_business_day(payday));
            prop_assert!(payday > start);
        }
    }
}

// ─── Formatting ───────────────────────────────────────────────────────────────

#[test]
fn payday_format_matches_the_presentation_contract() {
    assert_eq!(format_payday(date(2014, 9, 1)), "Monday, September 1, 2014");
}
