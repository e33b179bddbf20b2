//! Configuration types for textual date handling.

/// Configuration for date format handling
#[derive(Debug, Clone)]
pub struct DateFormatConfig {
    /// Date-only format strings, tried in order
    pub date_formats: Vec<String>,
    /// Date-time format strings, tried in order; the time of day is discarded
    pub datetime_formats: Vec<String>,
    /// Enable heuristic format detection when no listed format matches
    ///
    /// Detection only proposes ISO, slash, dotted and compact layouts, all of
    /// which the default lists already contain. It matters only for callers
    /// that replace `date_formats` with a narrower list.
    pub enable_format_detection: bool,
}

impl Default for DateFormatConfig {
    fn default() -> Self {
        Self {
            date_formats: vec![
                "%Y-%m-%d".to_string(), // ISO format: 2023-01-15
                "%m/%d/%Y".to_string(), // US: 01/15/2023
                "%d/%m/%Y".to_string(), // UK/NL: 15/01/2023
                "%d-%m-%Y".to_string(), // European: 15-01-2023
                "%d.%m.%Y".to_string(), // 15.01.2023
                "%Y/%m/%d".to_string(), // 2023/01/15
                "%Y%m%d".to_string(),   // Compact: 20230115
                "%d %b %Y".to_string(), // 15 Jan 2023
                "%d %B %Y".to_string(), // 15 January 2023
                "%b %d %Y".to_string(), // Jan 15 2023
                "%B %d, %Y".to_string(), // January 15, 2023
            ],
            datetime_formats: vec![
                "%Y-%m-%dT%H:%M:%S%.f".to_string(),
                "%Y-%m-%d %H:%M:%S%.f".to_string(),
                "%Y-%m-%dT%H:%M".to_string(),
                "%Y-%m-%d %H:%M".to_string(),
                "%m/%d/%Y %H:%M:%S".to_string(),
                "%m/%d/%Y %H:%M".to_string(),
                "%d-%m-%Y %H:%M".to_string(),
            ],
            enable_format_detection: true,
        }
    }
}

impl DateFormatConfig {
    /// Iterate over every configured format string
    pub fn all_formats(&self) -> impl Iterator<Item = &str> {
        self.date_formats
            .iter()
            .chain(self.datetime_formats.iter())
            .map(String::as_str)
    }
}
