//! Filtering capabilities for normalized incident records
//!
//! This module provides the dashboard's record filter: composable predicates
//! over the output collection, plus the filter form that builds them.

pub mod core;
pub mod criteria;
pub mod date;
pub mod form;

pub use self::core::{AndFilter, IncidentFilter, IncludeAllFilter, NotFilter, OrFilter, SharedFilter};
pub use criteria::{
    CategoryFilter, ClientIdFilter, FundingSourceFilter, ProductAreaFilter, SeriousnessFilter,
    TeamFilter,
};
pub use date::DateRangeFilter;
pub use form::{FilterOptions, IncidentFilters, apply_filters};
