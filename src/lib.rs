mod consts;
mod convert;
mod day_number;
mod prelude;
mod types;

pub use consts::*;
pub use convert::{ConvertError, convert, convert_date, gregorian_to_jalali, jalali_to_gregorian};
pub use day_number::{DateParts, DayNumber};
pub use types::{Calendar, Day, Month, Year, days_in_month, is_leap_year, month_length};

use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// A validated date in one of the two supported calendars.
///
/// Only [`CalendarDate::new`] and [`CalendarDate::parse`] construct one, so
/// every value has a year in `1..=9999`, a month in `1..=12` and a day that
/// exists in that month of its calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
#[serde(try_from = "TaggedDate", into = "TaggedDate")]
pub struct CalendarDate {
    calendar: Calendar,
    year: Year,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0:?} (expected YYYY-MM-DD)")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for {calendar} month {year:04}-{month:02}")]
    InvalidDay {
        calendar: Calendar,
        year: u16,
        month: u8,
        day: u8,
    },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Creates a date after checking each component against `calendar`
    ///
    /// # Errors
    /// Returns the `ParseError` of the first component that is out of range.
    pub fn new(calendar: Calendar, year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, calendar, year, month)?;
        Ok(Self {
            calendar,
            year,
            month,
            day,
        })
    }

    /// Parses a strict `YYYY-MM-DD` string as a date of `calendar`.
    ///
    /// The input must be exactly four digits, a hyphen, two digits, a hyphen
    /// and two digits. Surrounding whitespace, signs, short fields and trailing
    /// characters are all rejected.
    ///
    /// # Errors
    /// Returns `ParseError::EmptyInput` or `ParseError::InvalidFormat` for
    /// malformed text, or a range error for a well-formed but impossible date.
    pub fn parse(calendar: Calendar, s: &str) -> Result<Self, ParseError> {
        if s.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        if s.len() != DATE_STR_LEN {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }

        let parts: Vec<&str> = s.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        };

        let year = Self::parse_u16(Self::fixed_width(year, 4, s)?)?;
        let month = Self::parse_u8(Self::fixed_width(month, 2, s)?)?;
        let day = Self::parse_u8(Self::fixed_width(day, 2, s)?)?;

        Self::new(calendar, year, month, day)
    }

    pub const fn calendar(&self) -> Calendar {
        self.calendar
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// The date as a plain triple
    pub const fn parts(&self) -> DateParts {
        DateParts::new(self.year.as_i64(), self.month.get(), self.day.get())
    }

    /// Day number counted from this date's own calendar epoch
    pub fn day_number(&self) -> DayNumber {
        DayNumber::encode(
            self.calendar,
            self.year.as_i64(),
            self.month.get(),
            self.day.get(),
        )
    }

    /// Day number on the Gregorian epoch, comparable across both calendars
    pub fn gregorian_day_number(&self) -> DayNumber {
        self.day_number()
            .rebase(self.calendar, Calendar::Gregorian)
    }
}

impl CalendarDate {
    /// Helper to parse u16 with better error messages
    fn parse_u16(s: &str) -> Result<u16, ParseError> {
        s.parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    /// Accepts `part` only if it is exactly `width` ASCII digits
    fn fixed_width<'a>(part: &'a str, width: usize, input: &str) -> Result<&'a str, ParseError> {
        if part.len() == width && part.bytes().all(|b| b.is_ascii_digit()) {
            Ok(part)
        } else {
            Err(ParseError::InvalidFormat(input.to_owned()))
        }
    }
}

/// Serialized form of a [`CalendarDate`]: `{"calendar": "jalali", "date": "1403-01-01"}`
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TaggedDate {
    calendar: Calendar,
    date: String,
}

impl TryFrom<TaggedDate> for CalendarDate {
    type Error = ParseError;

    fn try_from(value: TaggedDate) -> Result<Self, Self::Error> {
        Self::parse(value.calendar, &value.date)
    }
}

impl From<CalendarDate> for TaggedDate {
    fn from(date: CalendarDate) -> Self {
        Self {
            calendar: date.calendar,
            date: date.to_string(),
        }
    }
}
