//! Resolution of heterogeneous date-like cell values into calendar dates.
//!
//! Spreadsheet exports mix three encodings in the same column: pre-formatted
//! text, day-count serials, and (through corruption) millisecond epoch
//! timestamps. Each encoding occupies its own numeric range, and every branch
//! re-checks the resulting year so that a nonsensical conversion yields no
//! date instead of a garbage one.
//!
//! Resolution order, first match wins:
//! 1. absent or empty value: no date
//! 2. text that parses as a date with a plausible year (a bare four-digit
//!    year is January 1st)
//! 3. otherwise the value must coerce to a finite number greater than zero
//! 4. above [`EPOCH_MILLIS_THRESHOLD`]: epoch milliseconds
//! 5. below [`MAX_SERIAL_DAY`]: spreadsheet serial day
//! 6. anything else: no date
//!
//! Dates are resolved in UTC.

use chrono::{DateTime, Datelike, NaiveDate};

use crate::models::raw::RawValue;
use crate::schema::date_utils::parse_date_string;
use crate::schema::types::DateFormatConfig;

/// Numbers above this are treated as millisecond epoch timestamps
pub const EPOCH_MILLIS_THRESHOLD: f64 = 100_000_000_000.0;

/// Serial days must be strictly below this (9999-12-31 in serial terms)
pub const MAX_SERIAL_DAY: f64 = 2_958_465.0;

/// Serial day number of 1970-01-01 (serial day 0 is 1899-12-30)
pub const UNIX_EPOCH_SERIAL_OFFSET: f64 = 25_569.0;

/// Seconds in one calendar day
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Exclusive lower bound for a plausible year
pub const YEAR_LOWER_BOUND: i32 = 1900;

/// Exclusive upper bound for a plausible year
pub const YEAR_UPPER_BOUND: i32 = 2100;

/// Check whether a year lies strictly within the plausible range
#[must_use]
pub const fn is_plausible_year(year: i32) -> bool {
    year > YEAR_LOWER_BOUND && year < YEAR_UPPER_BOUND
}

fn plausible(date: NaiveDate) -> Option<NaiveDate> {
    is_plausible_year(date.year()).then_some(date)
}

/// Resolve a raw cell value into a calendar date
///
/// Returns `None` when the value is absent or fails every resolution rule.
/// Never panics.
#[must_use]
pub fn normalize_date(value: Option<&RawValue>, config: &DateFormatConfig) -> Option<NaiveDate> {
    let value = value?;
    if value.is_empty() {
        return None;
    }

    if let RawValue::Text(text) = value {
        if let Some(date) = parse_date_string(text, config).and_then(plausible) {
            return Some(date);
        }
    }

    let number = value.as_number()?;
    if !number.is_finite() || number <= 0.0 {
        return None;
    }

    if number > EPOCH_MILLIS_THRESHOLD {
        if let Some(date) = date_from_epoch_millis(number) {
            return Some(date);
        }
    }

    if number < MAX_SERIAL_DAY {
        return date_from_serial(number);
    }

    None
}

/// Convert a millisecond epoch timestamp into a date with a plausible year
#[must_use]
pub fn date_from_epoch_millis(millis: f64) -> Option<NaiveDate> {
    if !millis.is_finite() {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    let millis = millis.trunc() as i64;
    DateTime::from_timestamp_millis(millis)
        .map(|timestamp| timestamp.date_naive())
        .and_then(plausible)
}

/// Convert a spreadsheet serial day into a date with a plausible year
///
/// Fractional days (time of day) are truncated.
#[must_use]
pub fn date_from_serial(serial: f64) -> Option<NaiveDate> {
    if !(serial > 0.0 && serial < MAX_SERIAL_DAY) {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    let unix_days = (serial - UNIX_EPOCH_SERIAL_OFFSET).floor() as i64;
    DateTime::from_timestamp(unix_days * SECONDS_PER_DAY, 0)
        .map(|timestamp| timestamp.date_naive())
        .and_then(plausible)
}

/// Convert a date back into its spreadsheet serial day
#[must_use]
pub fn date_to_serial(date: NaiveDate) -> i64 {
    let unix_days = date.and_time(chrono::NaiveTime::MIN).and_utc().timestamp() / SECONDS_PER_DAY;
    #[allow(clippy::cast_possible_truncation)]
    let offset = UNIX_EPOCH_SERIAL_OFFSET as i64;
    unix_days + offset
}
