//! Dashboard filter form
//!
//! Every criterion is optional; `None` means "all". The form converts into an
//! `AndFilter` of the criteria that are set.

use chrono::NaiveDate;
use itertools::Itertools;

use crate::filter::core::{AndFilter, IncidentFilter};
use crate::filter::criteria::{
    CategoryFilter, ClientIdFilter, FundingSourceFilter, ProductAreaFilter, SeriousnessFilter,
    TeamFilter,
};
use crate::filter::date::DateRangeFilter;
use crate::models::incident::{
    FundingSource, IncidentCategory, NormalizedRecord, SeriousnessScore,
};

/// Filter criteria for a collection of normalized records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncidentFilters {
    pub team: Option<String>,
    pub product_area: Option<String>,
    pub funding_source: Option<FundingSource>,
    pub seriousness: Option<SeriousnessScore>,
    pub category: Option<IncidentCategory>,
    /// Substring of the client identifier; empty means "all"
    pub client_id: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl IncidentFilters {
    /// Whether no criterion is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_filter().is_empty()
    }

    /// Build the conjunction of the criteria that are set
    #[must_use]
    pub fn to_filter(&self) -> AndFilter {
        let mut filter = AndFilter::default();
        if let Some(team) = &self.team {
            filter = filter.with(TeamFilter(team.clone()));
        }
        if let Some(product_area) = &self.product_area {
            filter = filter.with(ProductAreaFilter(product_area.clone()));
        }
        if let Some(funding_source) = self.funding_source {
            filter = filter.with(FundingSourceFilter(funding_source));
        }
        if let Some(seriousness) = self.seriousness {
            filter = filter.with(SeriousnessFilter(seriousness));
        }
        if let Some(category) = self.category {
            filter = filter.with(CategoryFilter(category));
        }
        if let Some(client_id) = self.client_id.as_ref().filter(|id| !id.is_empty()) {
            filter = filter.with(ClientIdFilter(client_id.clone()));
        }
        let range = DateRangeFilter::new(self.start_date, self.end_date);
        if !range.is_unbounded() {
            filter = filter.with(range);
        }
        filter
    }
}

/// Select the records matching `filters`, in their original order
#[must_use]
pub fn apply_filters<'a>(
    records: &'a [NormalizedRecord],
    filters: &IncidentFilters,
) -> Vec<&'a NormalizedRecord> {
    filters.to_filter().filter(records)
}

/// Distinct values offered by the filter form, sorted by display text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub teams: Vec<String>,
    pub product_areas: Vec<String>,
    pub categories: Vec<IncidentCategory>,
}

impl FilterOptions {
    #[must_use]
    pub fn from_records(records: &[NormalizedRecord]) -> Self {
        Self {
            teams: records.iter().map(|r| r.team.clone()).unique().sorted().collect(),
            product_areas: records
                .iter()
                .map(|r| r.product_area.clone())
                .unique()
                .sorted()
                .collect(),
            categories: records
                .iter()
                .map(|r| r.incident_category)
                .unique()
                .sorted_by_key(|c| c.display_name())
                .collect(),
        }
    }
}
