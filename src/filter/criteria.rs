//! Field filters for normalized incident records

use crate::filter::core::IncidentFilter;
use crate::models::incident::{
    FundingSource, IncidentCategory, NormalizedRecord, SeriousnessScore,
};

/// Exact match on the reporting team
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamFilter(pub String);

impl IncidentFilter for TeamFilter {
    fn matches(&self, record: &NormalizedRecord) -> bool {
        record.team == self.0
    }
}

/// Exact match on the product area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductAreaFilter(pub String);

impl IncidentFilter for ProductAreaFilter {
    fn matches(&self, record: &NormalizedRecord) -> bool {
        record.product_area == self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FundingSourceFilter(pub FundingSource);

impl IncidentFilter for FundingSourceFilter {
    fn matches(&self, record: &NormalizedRecord) -> bool {
        record.funding_source == self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriousnessFilter(pub SeriousnessScore);

impl IncidentFilter for SeriousnessFilter {
    fn matches(&self, record: &NormalizedRecord) -> bool {
        record.seriousness_score == self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryFilter(pub IncidentCategory);

impl IncidentFilter for CategoryFilter {
    fn matches(&self, record: &NormalizedRecord) -> bool {
        record.incident_category == self.0
    }
}

/// Substring match on the client identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIdFilter(pub String);

impl IncidentFilter for ClientIdFilter {
    fn matches(&self, record: &NormalizedRecord) -> bool {
        record.client_id.contains(self.0.as_str())
    }
}
