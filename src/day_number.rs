//! Day-number transform.
//!
//! A [`DayNumber`] counts days from a calendar's own epoch: Gregorian
//! 1600-01-01 or Jalali 979-01-01. The two epochs are [`EPOCH_OFFSET`] days
//! apart, so moving a day count between calendars is a plain shift. All
//! divisions are floor divisions, which keeps encode and decode exact inverses
//! for years before either epoch as well.

use crate::consts::{
    DAYS_PER_4_YEARS, DAYS_PER_33_YEARS, DAYS_PER_100_YEARS, DAYS_PER_400_YEARS, DAYS_PER_YEAR,
    EPOCH_OFFSET, GREGORIAN_EPOCH_YEAR, JALALI_CYCLE_YEARS, JALALI_EPOCH_YEAR,
    JALALI_LEAPS_PER_CYCLE, MAX_MONTH,
};
use crate::prelude::*;
use crate::types::{Calendar, is_leap_year, month_length};
use serde::{Deserialize, Serialize};

/// Signed count of days from a calendar epoch.
///
/// The value carries no calendar tag; the calendar passed to
/// [`DayNumber::decode`] decides which epoch it is read against.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Into,
    Deref,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct DayNumber(i64);

/// An unvalidated (year, month, day) triple produced by decoding a day number.
///
/// The year is not limited to `1..=9999`: converting dates near either end of
/// the input range can land before year 1 or after year 9999.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct DateParts {
    pub year: i64,
    pub month: u8,
    pub day: u8,
}

impl DayNumber {
    pub const fn new(days: i64) -> Self {
        Self(days)
    }

    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Day number of `(year, month, day)` counted from `calendar`'s epoch.
    ///
    /// The month must already be within `1..=12`.
    pub(crate) fn encode(calendar: Calendar, year: i64, month: u8, day: u8) -> Self {
        debug_assert!(month != 0 && month <= MAX_MONTH);

        let leap = is_leap_year(calendar, year);
        let before_year = match calendar {
            Calendar::Gregorian => gregorian_days_before_year(year),
            Calendar::Jalali => jalali_days_before_year(year),
        };
        let before_month: i64 = (1..month)
            .map(|m| i64::from(month_length(calendar, m, leap)))
            .sum();

        Self(before_year + before_month + i64::from(day) - 1)
    }

    /// Re-expresses this day number against the epoch of `to`.
    pub const fn rebase(self, from: Calendar, to: Calendar) -> Self {
        match (from, to) {
            (Calendar::Gregorian, Calendar::Jalali) => Self(self.0 - EPOCH_OFFSET),
            (Calendar::Jalali, Calendar::Gregorian) => Self(self.0 + EPOCH_OFFSET),
            _ => self,
        }
    }

    /// Decodes this day number into a date of `calendar`.
    pub fn decode(self, calendar: Calendar) -> DateParts {
        let (year, ordinal, leap) = match calendar {
            Calendar::Gregorian => gregorian_year_and_ordinal(self.0),
            Calendar::Jalali => jalali_year_and_ordinal(self.0),
        };
        debug_assert_eq!(leap, is_leap_year(calendar, year));

        let (month, day) = month_and_day(calendar, leap, ordinal);
        DateParts { year, month, day }
    }
}

impl DateParts {
    pub const fn new(year: i64, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// True when the month and day exist in `calendar` for this year.
    pub const fn is_valid(&self, calendar: Calendar) -> bool {
        self.month != 0
            && self.month <= MAX_MONTH
            && self.day != 0
            && self.day <= month_length(calendar, self.month, is_leap_year(calendar, self.year))
    }

    /// Day number of this triple in `calendar`, or `None` if the triple is not a date there.
    pub fn day_number(&self, calendar: Calendar) -> Option<DayNumber> {
        self.is_valid(calendar)
            .then(|| DayNumber::encode(calendar, self.year, self.month, self.day))
    }
}

fn gregorian_days_before_year(year: i64) -> i64 {
    let n = year - GREGORIAN_EPOCH_YEAR;
    DAYS_PER_YEAR * n + (n + 3).div_euclid(4) - (n + 99).div_euclid(100) + (n + 399).div_euclid(400)
}

const fn jalali_days_before_year(year: i64) -> i64 {
    let n = year - JALALI_EPOCH_YEAR;
    DAYS_PER_YEAR * n
        + n.div_euclid(JALALI_CYCLE_YEARS) * JALALI_LEAPS_PER_CYCLE
        + (n.rem_euclid(JALALI_CYCLE_YEARS) + 3) / 4
}

/// Number of days in Jalali `year`, 365 or 366.
pub(crate) const fn jalali_year_length(year: i64) -> i64 {
    jalali_days_before_year(year + 1) - jalali_days_before_year(year)
}

/// Splits a Gregorian day number into (year, zero-based day of year, leap).
fn gregorian_year_and_ordinal(days: i64) -> (i64, i64, bool) {
    let mut year = GREGORIAN_EPOCH_YEAR + 400 * days.div_euclid(DAYS_PER_400_YEARS);
    let mut rem = days.rem_euclid(DAYS_PER_400_YEARS);
    let mut leap = true;

    // The first century of each 400-year block keeps its leap day on year 00.
    if rem > DAYS_PER_100_YEARS {
        rem -= 1;
        year += 100 * (rem / DAYS_PER_100_YEARS);
        rem %= DAYS_PER_100_YEARS;
        if rem >= DAYS_PER_YEAR {
            rem += 1;
        } else {
            leap = false;
        }
    }

    year += 4 * (rem / DAYS_PER_4_YEARS);
    rem %= DAYS_PER_4_YEARS;

    if rem > DAYS_PER_YEAR {
        leap = false;
        rem -= 1;
        year += rem / DAYS_PER_YEAR;
        rem %= DAYS_PER_YEAR;
    }

    (year, rem, leap)
}

/// Splits a Jalali day number into (year, zero-based day of year, leap).
fn jalali_year_and_ordinal(days: i64) -> (i64, i64, bool) {
    let mut year = JALALI_EPOCH_YEAR + JALALI_CYCLE_YEARS * days.div_euclid(DAYS_PER_33_YEARS);
    let mut rem = days.rem_euclid(DAYS_PER_33_YEARS);

    let block = rem / DAYS_PER_4_YEARS;
    year += 4 * block;
    rem %= DAYS_PER_4_YEARS;

    // Eight 4-year blocks open with a leap year; the ninth is the lone
    // common year that closes the cycle.
    let mut leap = block < JALALI_LEAPS_PER_CYCLE;
    if rem > DAYS_PER_YEAR {
        leap = false;
        rem -= 1;
        year += rem / DAYS_PER_YEAR;
        rem %= DAYS_PER_YEAR;
    }

    (year, rem, leap)
}

/// Maps a zero-based day of year onto (month, day).
///
/// Anything left over after the eleventh month lands in month 12, so an
/// out-of-range ordinal shows up as an invalid day rather than a panic.
fn month_and_day(calendar: Calendar, leap: bool, ordinal: i64) -> (u8, u8) {
    let mut rem = ordinal;
    let mut month = 1;
    while month < MAX_MONTH {
        let len = i64::from(month_length(calendar, month, leap));
        if rem < len {
            break;
        }
        rem -= len;
        month += 1;
    }
    // 0 never passes DateParts::is_valid
    let day = u8::try_from(rem + 1).unwrap_or(0);
    (month, day)
}
