//! Output channel for generated paydays.
//!
//! The generator emits through a [`Presenter`] as each payday is produced:
//! a plain-text channel for status/error messages and a formatted channel
//! for paydays. The payday format is `"<Weekday>, <Month> <day>, <year>"`
//! with no leading zero on the day, e.g. `"Monday, September 1, 2014"`.

use pay_time::Date;

/// Render a payday as `"Monday, September 1, 2014"`.
pub fn format_payday(payday: Date) -> String {
    format!(
        "{}, {} {}, {}",
        payday.weekday(),
        payday.month_of_year(),
        payday.day_of_month(),
        payday.year()
    )
}

/// Receives generated output in generation order.
pub trait Presenter {
    /// Write a plain line of text (status and error messages).
    fn write_line(&mut self, text: &str);

    /// Write a payday on the formatted channel.
    fn write_payday(&mut self, payday: Date) {
        self.write_line(&format_payday(payday));
    }
}

/// A presenter that prints to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsolePresenter;

impl Presenter for ConsolePresenter {
    fn write_line(&mut self, text: &str) {
        println!("{text}");
    }
}

/// A presenter that records every line in memory. Intended for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryPresenter {
    lines: Vec<String>,
}

impl MemoryPresenter {
    /// Create an empty recording presenter.
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines written so far, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Presenter for MemoryPresenter {
    fn write_line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}
