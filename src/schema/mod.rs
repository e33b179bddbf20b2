//! Module for resolving loosely typed spreadsheet cells into calendar dates.

pub mod date_normalizer;
pub mod date_utils;
pub mod types;

pub use date_normalizer::{
    date_from_epoch_millis, date_from_serial, date_to_serial, is_plausible_year, normalize_date,
};
pub use date_utils::{detect_date_format, parse_date_string};
pub use types::DateFormatConfig;
