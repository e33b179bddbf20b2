//! Core filtering functionality for normalized incident records
//!
//! Filters select records from the in-memory output collection. They never
//! reorder, modify or re-validate records.

use std::sync::Arc;

use crate::models::incident::NormalizedRecord;

/// Trait for objects that select normalized records
pub trait IncidentFilter: std::fmt::Debug {
    /// Whether `record` passes this filter
    fn matches(&self, record: &NormalizedRecord) -> bool;

    /// Select the passing records, preserving their order
    fn filter<'a>(&self, records: &'a [NormalizedRecord]) -> Vec<&'a NormalizedRecord> {
        records.iter().filter(|record| self.matches(record)).collect()
    }

    /// Count the passing records
    fn count(&self, records: &[NormalizedRecord]) -> usize {
        records.iter().filter(|record| self.matches(record)).count()
    }
}

/// Shared, thread-safe filter handle
pub type SharedFilter = Arc<dyn IncidentFilter + Send + Sync>;

/// A filter that includes all records
#[derive(Debug, Clone, Copy, Default)]
pub struct IncludeAllFilter;

impl IncidentFilter for IncludeAllFilter {
    fn matches(&self, _record: &NormalizedRecord) -> bool {
        true
    }
}

/// A filter that combines multiple filters with a logical AND
///
/// An empty `AndFilter` includes every record.
#[derive(Debug, Clone, Default)]
pub struct AndFilter {
    filters: Vec<SharedFilter>,
}

impl AndFilter {
    /// Create a new AND filter
    #[must_use]
    pub fn new(filters: Vec<SharedFilter>) -> Self {
        Self { filters }
    }

    /// Add a filter to the conjunction
    #[must_use]
    pub fn with(mut self, filter: impl IncidentFilter + Send + Sync + 'static) -> Self {
        self.filters.push(Arc::new(filter));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl IncidentFilter for AndFilter {
    fn matches(&self, record: &NormalizedRecord) -> bool {
        self.filters.iter().all(|filter| filter.matches(record))
    }
}

/// A filter that combines multiple filters with a logical OR
///
/// An empty `OrFilter` excludes every record.
#[derive(Debug, Clone, Default)]
pub struct OrFilter {
    filters: Vec<SharedFilter>,
}

impl OrFilter {
    /// Create a new OR filter
    #[must_use]
    pub fn new(filters: Vec<SharedFilter>) -> Self {
        Self { filters }
    }
}

impl IncidentFilter for OrFilter {
    fn matches(&self, record: &NormalizedRecord) -> bool {
        self.filters.iter().any(|filter| filter.matches(record))
    }
}

/// A filter that inverts another filter
#[derive(Debug, Clone)]
pub struct NotFilter {
    inner: SharedFilter,
}

impl NotFilter {
    #[must_use]
    pub fn new(inner: SharedFilter) -> Self {
        Self { inner }
    }
}

impl IncidentFilter for NotFilter {
    fn matches(&self, record: &NormalizedRecord) -> bool {
        !self.inner.matches(record)
    }
}
