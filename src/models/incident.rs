//! Normalized incident model
//!
//! A `NormalizedRecord` is built once per accepted row and never changes
//! afterwards. It keeps the raw report-type flags next to the collapsed
//! category because cross-cutting reports look at the flags directly.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

/// Single incident category chosen by fixed precedence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum IncidentCategory {
    Suicide,
    Aggression,
    Fall,
    Medication,
    Security,
    Other,
    Unknown,
}

impl IncidentCategory {
    /// Get the display name for this category
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Suicide => "Suicide",
            Self::Aggression => "Aggression",
            Self::Fall => "Fall",
            Self::Medication => "Medication",
            Self::Security => "Security",
            Self::Other => "Other",
            Self::Unknown => "Unknown",
        }
    }

    /// All categories, highest precedence first
    #[must_use]
    pub const fn all_categories() -> [Self; 7] {
        [
            Self::Suicide,
            Self::Aggression,
            Self::Fall,
            Self::Medication,
            Self::Security,
            Self::Other,
            Self::Unknown,
        ]
    }

    /// Look up a category by its display name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all_categories()
            .into_iter()
            .find(|category| category.display_name() == name)
    }
}

impl fmt::Display for IncidentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Funding regime, derived from the client's age at the incident
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FundingSource {
    /// Client under 18 at the incident
    #[serde(rename = "Youth Law")]
    YouthLaw,
    /// Client 18 or older at the incident
    #[serde(rename = "WMO")]
    Wmo,
}

impl FundingSource {
    /// Age below which care falls under youth legislation
    pub const ADULT_AGE: i32 = 18;

    #[must_use]
    pub const fn from_age(age_in_years: i32) -> Self {
        if age_in_years < Self::ADULT_AGE {
            Self::YouthLaw
        } else {
            Self::Wmo
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::YouthLaw => "Youth Law",
            Self::Wmo => "WMO",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Youth Law" => Some(Self::YouthLaw),
            "WMO" => Some(Self::Wmo),
            _ => None,
        }
    }
}

impl fmt::Display for FundingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Ordinal seriousness of an incident, always within 1..=5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SeriousnessScore(u8);

impl SeriousnessScore {
    pub const MIN: Self = Self(1);
    /// Reserved for suicide-related reports
    pub const MAX: Self = Self(5);

    /// Clamp an additive score into range
    #[must_use]
    pub fn clamped(score: u32) -> Self {
        let bounded = score.clamp(u32::from(Self::MIN.0), u32::from(Self::MAX.0));
        Self(u8::try_from(bounded).unwrap_or(Self::MAX.0))
    }

    /// Construct from an exact value, if it is in range
    #[must_use]
    pub fn new(score: u8) -> Option<Self> {
        (Self::MIN.0..=Self::MAX.0)
            .contains(&score)
            .then_some(Self(score))
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for SeriousnessScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated, feature-enriched incident
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRecord {
    /// `{client}-{incident timestamp ms}-{row index}`, unique within a batch
    pub id: String,
    pub incident_date: NaiveDate,
    pub team: String,
    pub client_id: String,
    #[serde(rename = "clientDateOfBirth")]
    pub client_dob: NaiveDate,
    pub product_area: String,

    pub is_fall_incident: bool,
    pub is_medication_incident: bool,
    pub is_security_incident: bool,
    pub is_suicide_incident: bool,
    pub is_aggression_incident: bool,
    pub is_other_incident: bool,

    pub aggression_type: String,
    pub victim_consequences: String,
    pub supporter_impact_score: u8,
    pub client_impact_score: u8,
    pub description: String,

    // Engineered features
    pub age_at_incident: i32,
    pub incident_category: IncidentCategory,
    pub seriousness_score: SeriousnessScore,
    pub funding_source: FundingSource,
}
