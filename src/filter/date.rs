//! Date filtering for normalized incident records

use chrono::NaiveDate;

use crate::filter::core::IncidentFilter;
use crate::models::incident::NormalizedRecord;

/// A filter that includes only incidents within an inclusive date range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRangeFilter {
    /// The start date (inclusive)
    start_date: Option<NaiveDate>,

    /// The end date (inclusive)
    end_date: Option<NaiveDate>,
}

impl DateRangeFilter {
    /// Create a new date range filter
    ///
    /// # Arguments
    /// * `start_date` - Optional start date (inclusive)
    /// * `end_date` - Optional end date (inclusive)
    #[must_use]
    pub const fn new(start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Whether the range constrains anything
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none()
    }

    /// Whether `date` lies in the range
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date.is_none_or(|start| date >= start)
            && self.end_date.is_none_or(|end| date <= end)
    }
}

impl IncidentFilter for DateRangeFilter {
    fn matches(&self, record: &NormalizedRecord) -> bool {
        self.contains(record.incident_date)
    }
}
