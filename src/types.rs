use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, ESFAND, ESFAND_DAYS_LEAP, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    GREGORIAN_DAYS_IN_MONTH, JALALI_DAYS_IN_MONTH, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR,
    MIN_DAY,
};
use crate::day_number::jalali_year_length;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// The two calendars this crate converts between.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Calendar {
    /// Proleptic Gregorian calendar
    #[display(fmt = "gregorian")]
    Gregorian,
    /// Jalali (Solar Hijri) calendar, 33-year cycle arithmetic
    #[display(fmt = "jalali")]
    Jalali,
}

impl Calendar {
    /// Returns the calendar on the other side of a conversion
    pub const fn other(self) -> Self {
        match self {
            Self::Gregorian => Self::Jalali,
            Self::Jalali => Self::Gregorian,
        }
    }

    /// Shorthand for [`is_leap_year`]
    #[inline]
    pub const fn is_leap_year(self, year: i64) -> bool {
        is_leap_year(self, year)
    }

    /// Shorthand for [`days_in_month`]
    #[inline]
    pub const fn days_in_month(self, year: i64, month: u8) -> u8 {
        days_in_month(self, year, month)
    }
}

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        let non_zero = NonZeroU16::new(value).ok_or(ParseError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(ParseError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Returns the year widened for calendar arithmetic
    #[inline]
    pub const fn as_i64(self) -> i64 {
        self.0.get() as i64
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given calendar, year and month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the month length of `calendar`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, calendar: Calendar, year: Year, month: Month) -> Result<Self, ParseError> {
        let invalid = ParseError::InvalidDay {
            calendar,
            year: year.get(),
            month: month.get(),
            day: value,
        };
        let last = days_in_month(calendar, year.as_i64(), month.get());
        if !(MIN_DAY..=last).contains(&value) {
            return Err(invalid);
        }

        NonZeroU8::new(value).map(Self).ok_or(invalid)
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Calendar rules

/// Leap-year test for either calendar.
///
/// Gregorian years follow the 4/100/400 rule. A Jalali year is leap when the
/// day-number transform gives it 366 days, which places Esfand 30 inside it.
pub const fn is_leap_year(calendar: Calendar, year: i64) -> bool {
    match calendar {
        Calendar::Gregorian => {
            (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0)
                || (year % GREGORIAN_CYCLE == 0)
        }
        Calendar::Jalali => jalali_year_length(year) == 366,
    }
}

/// Length of `month` once the leap status of its year is known.
pub const fn month_length(calendar: Calendar, month: u8, leap: bool) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    match calendar {
        Calendar::Gregorian if month == FEBRUARY && leap => FEBRUARY_DAYS_LEAP,
        Calendar::Gregorian => GREGORIAN_DAYS_IN_MONTH[month as usize],
        Calendar::Jalali if month == ESFAND && leap => ESFAND_DAYS_LEAP,
        Calendar::Jalali => JALALI_DAYS_IN_MONTH[month as usize],
    }
}

pub const fn days_in_month(calendar: Calendar, year: i64, month: u8) -> u8 {
    month_length(calendar, month, is_leap_year(calendar, year))
}
