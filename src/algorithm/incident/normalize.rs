//! Row normalization
//!
//! Turns one raw row into a `NormalizedRecord` or a rejection. A row moves
//! through: resolve both dates, check their order, assemble the record
//! (age, category, translations), then score it. Scoring runs last because it
//! reads the assembled record.

use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::algorithm::incident::categories::classify;
use crate::algorithm::incident::severity::{SeverityFactors, seriousness_score};
use crate::config::PipelineConfig;
use crate::error::{DateField, RejectionReason};
use crate::models::incident::{FundingSource, NormalizedRecord, SeriousnessScore};
use crate::models::raw::{RawRecord, RawValue};
use crate::schema::date_normalizer::normalize_date;

pub use crate::algorithm::incident::translation::NOT_AVAILABLE;

/// Sentinel for absent victim consequences
pub const NO_CONSEQUENCES: &str = "None";
/// Sentinel for an absent description
pub const NO_DESCRIPTION: &str = "No description provided.";
/// Sentinel for an absent client identifier
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Upper end of the impact rating scale
pub const MAX_IMPACT_SCORE: u8 = 10;

/// Outcome of normalizing one row
pub type RowResult = std::result::Result<NormalizedRecord, RejectionReason>;

/// Age in whole years at `reference_date`
///
/// The year difference, minus one if the birthday has not yet been reached in
/// the reference year.
#[must_use]
pub fn age_at(birth_date: NaiveDate, reference_date: NaiveDate) -> i32 {
    let years = reference_date.year() - birth_date.year();
    if reference_date.month() < birth_date.month()
        || (reference_date.month() == birth_date.month()
            && reference_date.day() < birth_date.day())
    {
        years - 1
    } else {
        years
    }
}

/// Clamp an impact rating to the 0..=10 scale; absent or non-numeric is 0
#[must_use]
pub fn impact_rating(value: Option<&RawValue>) -> f64 {
    value
        .and_then(RawValue::as_number)
        .filter(|n| n.is_finite())
        .map_or(0.0, |n| n.clamp(0.0, f64::from(MAX_IMPACT_SCORE)))
}

/// Impact rating rounded to the nearest whole point, as stored on the record
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn impact_score(value: Option<&RawValue>) -> u8 {
    impact_rating(value).round() as u8
}

/// Row identifier: client, incident midnight (UTC epoch ms) and row position
#[must_use]
pub fn record_id(client_id: &str, incident_date: NaiveDate, index: usize) -> String {
    let millis = incident_date.and_time(NaiveTime::MIN).and_utc().timestamp_millis();
    format!("{client_id}-{millis}-{index}")
}

fn text_or(value: Option<&RawValue>, sentinel: &str) -> String {
    RawRecord::text_of(value).map_or_else(|| sentinel.to_string(), |text| text.into_owned())
}

fn resolve_date(
    value: Option<&RawValue>,
    field: DateField,
    config: &PipelineConfig,
) -> Result<NaiveDate, RejectionReason> {
    normalize_date(value, &config.date_format_config)
        .ok_or(RejectionReason::UnparseableDate { field })
}

/// Normalize a single raw row
///
/// `index` is the row's zero-based position in its batch and becomes part of
/// the record id.
pub fn normalize_row(index: usize, raw: &RawRecord, config: &PipelineConfig) -> RowResult {
    let incident_date = resolve_date(raw.incident_date.as_ref(), DateField::IncidentDate, config)?;
    let birth_date = resolve_date(raw.date_of_birth.as_ref(), DateField::DateOfBirth, config)?;

    if incident_date < birth_date {
        return Err(RejectionReason::ChronologyViolation {
            incident_date,
            birth_date,
        });
    }

    let age_at_incident = age_at(birth_date, incident_date);
    let flags = raw.flags();
    let client_id = text_or(raw.client_number.as_ref(), UNKNOWN_CLIENT);

    let mut record = NormalizedRecord {
        id: record_id(&client_id, incident_date, index),
        incident_date,
        team: text_or(raw.team.as_ref(), NOT_AVAILABLE),
        client_id,
        client_dob: birth_date,
        product_area: text_or(raw.notification_about.as_ref(), NOT_AVAILABLE),
        is_fall_incident: flags.fall,
        is_medication_incident: flags.medication,
        is_security_incident: flags.security,
        is_suicide_incident: flags.suicide,
        is_aggression_incident: flags.aggression,
        is_other_incident: flags.other,
        aggression_type: config
            .translator
            .translate_value(raw.aggression_type.as_ref()),
        victim_consequences: text_or(raw.victim_consequences.as_ref(), NO_CONSEQUENCES),
        supporter_impact_score: impact_score(raw.supporter_impact.as_ref()),
        client_impact_score: impact_score(raw.client_impact.as_ref()),
        description: text_or(raw.description.as_ref(), NO_DESCRIPTION),
        age_at_incident,
        incident_category: classify(&flags),
        seriousness_score: SeriousnessScore::MIN,
        funding_source: FundingSource::from_age(age_at_incident),
    };

    record.seriousness_score = seriousness_score(&SeverityFactors {
        is_suicide_incident: record.is_suicide_incident,
        victim_consequences: &record.victim_consequences,
        client_impact: impact_rating(raw.client_impact.as_ref()),
        supporter_impact: impact_rating(raw.supporter_impact.as_ref()),
    });

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::incident::IncidentCategory;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn row(incident: f64, birth: f64) -> RawRecord {
        RawRecord {
            incident_date: Some(RawValue::Number(incident)),
            date_of_birth: Some(RawValue::Number(birth)),
            client_number: Some(RawValue::Number(1042.0)),
            ..Default::default()
        }
    }

    #[test]
    fn test_age_at_birthday_boundary() {
        let birth = ymd(2005, 6, 15);
        assert_eq!(age_at(birth, ymd(2023, 6, 14)), 17);
        assert_eq!(age_at(birth, ymd(2023, 6, 15)), 18);
        assert_eq!(age_at(birth, ymd(2023, 5, 30)), 17);
        assert_eq!(age_at(birth, ymd(2023, 7, 1)), 18);
    }

    #[test]
    fn test_impact_score_coercion() {
        assert_eq!(impact_score(None), 0);
        assert_eq!(impact_score(Some(&RawValue::Number(8.0))), 8);
        assert_eq!(impact_score(Some(&RawValue::from("9"))), 9);
        assert_eq!(impact_score(Some(&RawValue::Number(14.0))), 10);
        assert_eq!(impact_score(Some(&RawValue::Number(-2.0))), 0);
        assert_eq!(impact_score(Some(&RawValue::Number(7.6))), 8);
        assert_eq!(impact_score(Some(&RawValue::from("high"))), 0);
        assert_eq!(impact_rating(Some(&RawValue::Number(7.4))), 7.4);
        assert_eq!(impact_rating(Some(&RawValue::Number(12.5))), 10.0);
    }

    #[test]
    fn test_fractional_impact_keeps_its_bonus() {
        let mut raw = row(45000.0, 25000.0);
        raw.client_impact = Some(RawValue::Number(7.4));
        raw.supporter_impact = Some(RawValue::Number(7.3));
        let record = normalize_row(0, &raw, &PipelineConfig::default()).unwrap();

        assert_eq!(record.client_impact_score, 7);
        assert_eq!(record.supporter_impact_score, 7);
        assert_eq!(record.seriousness_score.value(), 4);
    }

    #[test]
    fn test_record_id_is_deterministic() {
        let id = record_id("1042", ymd(1970, 1, 2), 3);
        assert_eq!(id, "1042-86400000-3");
    }

    #[test]
    fn test_sentinels_for_absent_fields() {
        let record = normalize_row(0, &row(45000.0, 25000.0), &PipelineConfig::default()).unwrap();
        assert_eq!(record.team, NOT_AVAILABLE);
        assert_eq!(record.product_area, NOT_AVAILABLE);
        assert_eq!(record.aggression_type, NOT_AVAILABLE);
        assert_eq!(record.victim_consequences, NO_CONSEQUENCES);
        assert_eq!(record.description, NO_DESCRIPTION);
        assert_eq!(record.incident_category, IncidentCategory::Unknown);
        assert_eq!(record.seriousness_score.value(), 1);
        assert_eq!(record.client_id, "1042");
    }

    #[test]
    fn test_blank_text_cells_get_sentinels() {
        let mut raw = row(45000.0, 25000.0);
        raw.team = Some(RawValue::from("   "));
        raw.description = Some(RawValue::from(" "));
        let record = normalize_row(0, &raw, &PipelineConfig::default()).unwrap();
        assert_eq!(record.team, NOT_AVAILABLE);
        assert_eq!(record.description, NO_DESCRIPTION);
    }

    #[test]
    fn test_missing_birth_date_is_rejected() {
        let mut raw = row(45000.0, 25000.0);
        raw.date_of_birth = None;
        assert_eq!(
            normalize_row(0, &raw, &PipelineConfig::default()),
            Err(RejectionReason::UnparseableDate {
                field: DateField::DateOfBirth
            })
        );
    }

    #[test]
    fn test_same_day_birth_is_accepted() {
        let record = normalize_row(0, &row(25000.0, 25000.0), &PipelineConfig::default()).unwrap();
        assert_eq!(record.age_at_incident, 0);
        assert_eq!(record.funding_source, FundingSource::YouthLaw);
    }
}
