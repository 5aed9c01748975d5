use tracing::{debug, trace};

use crate::{CalendarDate, DateParts, MAX_YEAR, ParseError, types::Calendar};

/// Error type for calendar conversions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The input is not a valid date of the source calendar.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The converted year does not fit a `CalendarDate`.
    #[error("Converted {calendar} year {year} is outside 1-{max}", max = MAX_YEAR)]
    YearOutOfRange { calendar: Calendar, year: i64 },

    /// The day-number transform produced a month or day that does not exist.
    #[error("Conversion produced an impossible {calendar} date {parts}")]
    InvalidResult { calendar: Calendar, parts: DateParts },
}

/// Converts `YYYY-MM-DD` text from the Gregorian to the Jalali calendar.
///
/// Returns `None` for any input that is not a valid Gregorian date in the
/// strict `YYYY-MM-DD` layout with a year in `1..=9999`. The output year is
/// not clamped: `0001-01-01` converts to `-621-10-11`.
pub fn gregorian_to_jalali(text: &str) -> Option<String> {
    convert_text(text, Calendar::Gregorian, Calendar::Jalali)
}

/// Converts `YYYY-MM-DD` text from the Jalali to the Gregorian calendar.
///
/// Returns `None` for any input that is not a valid Jalali date in the
/// strict `YYYY-MM-DD` layout with a year in `1..=9999`. The output year is
/// not clamped: `9999-12-29` converts to `10621-03-19`.
pub fn jalali_to_gregorian(text: &str) -> Option<String> {
    convert_text(text, Calendar::Jalali, Calendar::Gregorian)
}

/// Parses `text` as a date of `from` and converts it to `to`.
///
/// # Errors
/// Returns `ConvertError::Parse` when `text` is not a valid `from` date.
pub fn convert(text: &str, from: Calendar, to: Calendar) -> Result<DateParts, ConvertError> {
    let date = CalendarDate::parse(from, text)?;
    convert_date(&date, to)
}

/// Converts an already validated date to `to`.
///
/// # Errors
/// Returns `ConvertError::InvalidResult` if the decoded month or day does not
/// exist in `to`.
pub fn convert_date(date: &CalendarDate, to: Calendar) -> Result<DateParts, ConvertError> {
    let source = date.day_number();
    let target = source.rebase(date.calendar(), to);
    let parts = target.decode(to);

    trace!(
        from = %date.calendar(),
        %to,
        %date,
        source = source.get(),
        target = target.get(),
        result = %parts,
        "converted date"
    );

    if !parts.is_valid(to) {
        return Err(ConvertError::InvalidResult {
            calendar: to,
            parts,
        });
    }
    Ok(parts)
}

fn convert_text(text: &str, from: Calendar, to: Calendar) -> Option<String> {
    match convert(text, from, to) {
        Ok(parts) => Some(parts.to_string()),
        Err(err) => {
            debug!(input = text, %from, %to, error = %err, "date not converted");
            None
        }
    }
}

impl CalendarDate {
    /// Converts this date into `target`, keeping the result a valid `CalendarDate`.
    ///
    /// # Errors
    /// Returns `ConvertError::YearOutOfRange` when the converted year falls
    /// outside `1..=9999`.
    pub fn to_calendar(&self, target: Calendar) -> Result<Self, ConvertError> {
        let parts = convert_date(self, target)?;
        let year = u16::try_from(parts.year)
            .ok()
            .filter(|y| (1..=MAX_YEAR).contains(y))
            .ok_or(ConvertError::YearOutOfRange {
                calendar: target,
                year: parts.year,
            })?;

        Ok(Self::new(target, year, parts.month, parts.day)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DayNumber, days_in_month};

    #[test]
    fn test_nowruz_fixed_points() {
        assert_eq!(gregorian_to_jalali("2024-03-20").as_deref(), Some("1403-01-01"));
        assert_eq!(jalali_to_gregorian("1403-01-01").as_deref(), Some("2024-03-20"));
        assert_eq!(gregorian_to_jalali("2025-03-21").as_deref(), Some("1404-01-01"));
    }

    #[test]
    fn test_known_dates() {
        struct TestCase {
            gregorian: &'static str,
            jalali: &'static str,
        }

        let cases = [
            TestCase {
                gregorian: "1600-03-20",
                jalali: "0979-01-01",
            },
            TestCase {
                gregorian: "1979-02-11",
                jalali: "1357-11-22",
            },
            TestCase {
                gregorian: "2000-02-29",
                jalali: "1378-12-10",
            },
            TestCase {
                gregorian: "2025-03-20",
                jalali: "1403-12-30",
            },
            TestCase {
                gregorian: "0622-03-21",
                jalali: "0001-01-01",
            },
        ];

        for case in &cases {
            assert_eq!(
                gregorian_to_jalali(case.gregorian).as_deref(),
                Some(case.jalali),
                "{} -> jalali",
                case.gregorian
            );
            assert_eq!(
                jalali_to_gregorian(case.jalali).as_deref(),
                Some(case.gregorian),
                "{} -> gregorian",
                case.jalali
            );
        }
    }

    #[test]
    fn test_gregorian_leap_day_boundary() {
        assert!(gregorian_to_jalali("2000-02-29").is_some());
        assert!(gregorian_to_jalali("2024-02-29").is_some());
        assert!(gregorian_to_jalali("1900-02-29").is_none());
        assert!(gregorian_to_jalali("2023-02-29").is_none());
    }

    #[test]
    fn test_esfand_30_only_in_jalali_leap_years() {
        assert!(crate::is_leap_year(Calendar::Jalali, 1403));
        assert_eq!(jalali_to_gregorian("1403-12-30").as_deref(), Some("2025-03-20"));
        assert_eq!(jalali_to_gregorian("1399-12-30").as_deref(), Some("2021-03-20"));
        assert!(jalali_to_gregorian("1402-12-30").is_none());
        assert!(jalali_to_gregorian("1404-12-30").is_none());
    }

    #[test]
    fn test_malformed_input_is_invalid() {
        for input in ["abcd-ef-gh", "2024-13-01", "", "2024-03-20abc", "2024-3-20"] {
            assert!(gregorian_to_jalali(input).is_none(), "{input:?}");
            assert!(jalali_to_gregorian(input).is_none(), "{input:?}");
        }
        assert!(gregorian_to_jalali("2024-02-30").is_none());
        // Ordibehesht has 31 days.
        assert!(jalali_to_gregorian("2024-02-30").is_some());
        assert!(jalali_to_gregorian("1403-07-31").is_none());
        assert!(gregorian_to_jalali("0000-01-01").is_none());
    }

    #[test]
    fn test_convert_reports_parse_errors() {
        assert_eq!(
            convert("2024-13-01", Calendar::Gregorian, Calendar::Jalali),
            Err(ConvertError::Parse(ParseError::InvalidMonth(13)))
        );
        assert_eq!(
            convert("", Calendar::Jalali, Calendar::Gregorian),
            Err(ConvertError::Parse(ParseError::EmptyInput))
        );
    }

    #[test]
    fn test_convert_same_calendar_is_identity() {
        let parts = convert("1403-12-30", Calendar::Jalali, Calendar::Jalali).unwrap();
        assert_eq!(parts, DateParts::new(1403, 12, 30));
    }

    #[test]
    fn test_output_year_is_not_clamped() {
        assert_eq!(gregorian_to_jalali("0001-01-01").as_deref(), Some("-621-10-11"));
        assert_eq!(jalali_to_gregorian("9999-12-29").as_deref(), Some("10621-03-19"));
        assert_eq!(gregorian_to_jalali("9999-12-31").as_deref(), Some("9378-10-10"));
        assert_eq!(jalali_to_gregorian("0001-01-01").as_deref(), Some("0622-03-21"));
    }

    #[test]
    fn test_to_calendar() {
        let nowruz = CalendarDate::new(Calendar::Jalali, 1403, 1, 1).unwrap();
        let gregorian = nowruz.to_calendar(Calendar::Gregorian).unwrap();
        assert_eq!(
            gregorian,
            CalendarDate::new(Calendar::Gregorian, 2024, 3, 20).unwrap()
        );
        assert_eq!(gregorian.to_calendar(Calendar::Jalali).unwrap(), nowruz);
    }

    #[test]
    fn test_to_calendar_out_of_range_year() {
        let first = CalendarDate::new(Calendar::Gregorian, 1, 1, 1).unwrap();
        assert_eq!(
            first.to_calendar(Calendar::Jalali),
            Err(ConvertError::YearOutOfRange {
                calendar: Calendar::Jalali,
                year: -621
            })
        );

        let last = CalendarDate::new(Calendar::Jalali, 9999, 12, 29).unwrap();
        let err = last.to_calendar(Calendar::Gregorian).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Converted gregorian year 10621 is outside 1-9999"
        );
    }

    #[test]
    fn test_string_round_trip_sampled() {
        for year in (1..=9999u16).step_by(7) {
            for month in 1..=12u8 {
                for calendar in [Calendar::Gregorian, Calendar::Jalali] {
                    let last = days_in_month(calendar, i64::from(year), month);
                    for day in [1, 15, last] {
                        let text = format!("{year:04}-{month:02}-{day:02}");
                        let there = convert(&text, calendar, calendar.other()).unwrap();
                        // Converted years outside 1-9999 cannot be parsed back.
                        if !(1..=i64::from(MAX_YEAR)).contains(&there.year) {
                            continue;
                        }
                        let back = convert(&there.to_string(), calendar.other(), calendar).unwrap();
                        assert_eq!(back.to_string(), text, "{calendar} {text}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_conversion_preserves_order() {
        let start = CalendarDate::new(Calendar::Gregorian, 1999, 1, 1).unwrap();
        let mut previous: Option<DateParts> = None;

        for offset in 0..3 * 366 {
            let days = DayNumber::new(start.day_number().get() + offset);
            let gregorian = days.decode(Calendar::Gregorian);
            let date = CalendarDate::new(
                Calendar::Gregorian,
                u16::try_from(gregorian.year).unwrap(),
                gregorian.month,
                gregorian.day,
            )
            .unwrap();

            let jalali = convert_date(&date, Calendar::Jalali).unwrap();
            if let Some(previous) = previous {
                assert!(previous < jalali, "{previous} !< {jalali}");
                let gap = jalali.day_number(Calendar::Jalali).unwrap().get()
                    - previous.day_number(Calendar::Jalali).unwrap().get();
                assert_eq!(gap, 1);
            }
            previous = Some(jalali);
        }
    }
}
