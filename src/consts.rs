/// Maximum valid input year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December / Esfand)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for Esfand, the last Jalali month
pub const ESFAND: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;
/// Days in Esfand for Jalali leap years
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const GREGORIAN_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days in each Jalali month (index 0 is unused, months are 1-indexed)
/// Esfand shows 29 days (non-leap year default)
pub const JALALI_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // Farvardin
    31, // Ordibehesht
    31, // Khordad
    31, // Tir
    31, // Mordad
    31, // Shahrivar
    30, // Mehr
    30, // Aban
    30, // Azar
    30, // Dey
    30, // Bahman
    29, // Esfand (non-leap, adjusted by is_leap_year check)
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Gregorian year whose January 1st is day number 0
pub const GREGORIAN_EPOCH_YEAR: i64 = 1600;
/// Jalali year whose Farvardin 1st is day number 0
pub const JALALI_EPOCH_YEAR: i64 = 979;
/// Days from Gregorian 1600-01-01 to Jalali 979-01-01
pub const EPOCH_OFFSET: i64 = 79;

pub(crate) const DAYS_PER_YEAR: i64 = 365;
/// 400 Gregorian years
pub(crate) const DAYS_PER_400_YEARS: i64 = 146_097;
/// 100 Gregorian years starting on a non-leap century year
pub(crate) const DAYS_PER_100_YEARS: i64 = 36_524;
/// 4 years, first one leap
pub(crate) const DAYS_PER_4_YEARS: i64 = 1_461;
/// 33 Jalali years holding 8 leap years
pub(crate) const DAYS_PER_33_YEARS: i64 = 12_053;
pub(crate) const JALALI_CYCLE_YEARS: i64 = 33;
pub(crate) const JALALI_LEAPS_PER_CYCLE: i64 = 8;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Length of a `YYYY-MM-DD` string
pub const DATE_STR_LEN: usize = 10;
