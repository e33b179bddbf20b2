use chrono::NaiveDate;
use incident_reader::{
    DateField, FundingSource, IncidentCategory, IncidentPipeline, LexicalTranslator,
    PipelineConfig, RawRecord, RawValue, RejectionReason, process_batch,
};
use pretty_assertions::assert_eq;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn yes() -> Option<RawValue> {
    Some(RawValue::from("Yes"))
}

fn no() -> Option<RawValue> {
    Some(RawValue::from("No"))
}

/// A row with every flag answered "No"
fn base_row(incident: RawValue, birth: RawValue) -> RawRecord {
    RawRecord {
        incident_date: Some(incident),
        date_of_birth: Some(birth),
        client_number: Some(RawValue::Number(5501.0)),
        team: Some(RawValue::from("Team Oost")),
        notification_about: Some(RawValue::from("Begeleid wonen")),
        fall: no(),
        medication: no(),
        security: no(),
        suicide: no(),
        aggression: no(),
        other: no(),
        ..Default::default()
    }
}

#[test]
fn test_aggression_scenario() {
    let raw = RawRecord {
        aggression: yes(),
        client_impact: Some(RawValue::Number(8.0)),
        supporter_impact: Some(RawValue::Number(5.0)),
        victim_consequences: Some(RawValue::from("minor bruise")),
        aggression_type: Some(RawValue::from("Handen (bijv. slaan, stoten)")),
        ..base_row(RawValue::Number(45000.0), RawValue::Number(25000.0))
    };

    let result = process_batch(&[raw]);
    assert!(result.is_clean());
    let record = &result.records[0];

    assert_eq!(record.incident_category, IncidentCategory::Aggression);
    assert_eq!(record.seriousness_score.value(), 3);
    assert_eq!(record.incident_date, ymd(2023, 3, 15));
    assert_eq!(record.aggression_type, "Hands (e.g., hitting, punching)");
    assert_eq!(record.victim_consequences, "minor bruise");
    assert_eq!(record.team, "Team Oost");
    assert_eq!(record.product_area, "Begeleid wonen");
    assert!(record.is_aggression_incident);
    assert!(!record.is_suicide_incident);
    assert_eq!(record.funding_source, FundingSource::Wmo);
}

#[test]
fn test_missing_incident_date_is_reported() {
    let mut raw = base_row(RawValue::Number(45000.0), RawValue::Number(25000.0));
    raw.incident_date = None;
    let good = base_row(RawValue::Number(45000.0), RawValue::Number(25000.0));

    let result = process_batch(&[good, raw]);
    assert_eq!(result.accepted_count(), 1);
    assert_eq!(result.rejected_count(), 1);

    let diagnostic = &result.diagnostics[0];
    assert_eq!(diagnostic.index, 1);
    assert_eq!(diagnostic.sheet_row(), 3);
    assert_eq!(
        diagnostic.reason,
        RejectionReason::UnparseableDate {
            field: DateField::IncidentDate
        }
    );
}

#[test]
fn test_incident_before_birth_is_reported() {
    let raw = base_row(RawValue::Number(20000.0), RawValue::Number(25000.0));
    let result = process_batch(&[raw]);

    assert!(result.records.is_empty());
    assert_eq!(
        result.diagnostics[0].reason,
        RejectionReason::ChronologyViolation {
            incident_date: ymd(1954, 10, 3),
            birth_date: ymd(1968, 6, 11),
        }
    );
}

#[test]
fn test_eighteenth_birthday_is_wmo() {
    let raw = base_row(
        RawValue::from("2023-06-15"),
        RawValue::from("2005-06-15"),
    );
    let record = process_batch(&[raw]).records.remove(0);
    assert_eq!(record.age_at_incident, 18);
    assert_eq!(record.funding_source, FundingSource::Wmo);

    let raw = base_row(
        RawValue::from("2023-06-14"),
        RawValue::from("2005-06-15"),
    );
    let record = process_batch(&[raw]).records.remove(0);
    assert_eq!(record.age_at_incident, 17);
    assert_eq!(record.funding_source, FundingSource::YouthLaw);
}

#[test]
fn test_suicide_overrides_everything() {
    let raw = RawRecord {
        suicide: yes(),
        aggression: yes(),
        fall: yes(),
        client_impact: Some(RawValue::Number(0.0)),
        victim_consequences: Some(RawValue::from("None")),
        ..base_row(RawValue::Number(45000.0), RawValue::Number(30000.0))
    };
    let record = process_batch(&[raw]).records.remove(0);
    assert_eq!(record.incident_category, IncidentCategory::Suicide);
    assert_eq!(record.seriousness_score.value(), 5);
    // The raw flags are all kept
    assert!(record.is_aggression_incident);
    assert!(record.is_fall_incident);
}

#[test]
fn test_mixed_date_encodings_in_one_batch() {
    let rows = vec![
        base_row(RawValue::from("03/15/2023"), RawValue::Number(36000.0)),
        base_row(RawValue::Number(1_678_838_400_000.0), RawValue::from("1998-07-25")),
        base_row(RawValue::from("45000"), RawValue::from("25/07/1998")),
        base_row(RawValue::Number(5_000_000.0), RawValue::Number(36000.0)),
    ];
    let result = process_batch(&rows);

    assert_eq!(result.accepted_count(), 3);
    for record in &result.records {
        assert_eq!(record.incident_date, ymd(2023, 3, 15));
    }
    assert_eq!(result.diagnostics[0].index, 3);
}

#[test]
fn test_ids_are_unique_for_same_day_incidents() {
    let rows = vec![
        base_row(RawValue::Number(45000.0), RawValue::Number(25000.0)),
        base_row(RawValue::Number(45000.0), RawValue::Number(25000.0)),
    ];
    let result = process_batch(&rows);
    assert_eq!(result.records[0].id, "5501-1678838400000-0");
    assert_eq!(result.records[1].id, "5501-1678838400000-1");
}

#[test]
fn test_reprocessing_is_identical() {
    let rows = vec![
        base_row(RawValue::Number(45000.0), RawValue::Number(25000.0)),
        base_row(RawValue::Number(20000.0), RawValue::Number(25000.0)),
        RawRecord {
            other: yes(),
            ..base_row(RawValue::from("2020-02-29"), RawValue::from("2010-02-28"))
        },
    ];
    assert_eq!(process_batch(&rows), process_batch(&rows));
}

#[test]
fn test_custom_translator() {
    let config = PipelineConfig::default()
        .with_translator(LexicalTranslator::from_pairs([("Schoppen", "Kicking")]))
        .with_rejection_logging(false);
    let pipeline = IncidentPipeline::new(config).unwrap();

    let raw = RawRecord {
        aggression_type: Some(RawValue::from("Schoppen")),
        ..base_row(RawValue::Number(45000.0), RawValue::Number(25000.0))
    };
    let record = pipeline.normalize_row(0, &raw).unwrap();
    assert_eq!(record.aggression_type, "Kicking");
}

#[test]
fn test_serialized_record_shape() {
    let raw = RawRecord {
        medication: yes(),
        ..base_row(RawValue::Number(45000.0), RawValue::Number(25000.0))
    };
    let record = process_batch(&[raw]).records.remove(0);
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["incidentDate"], "2023-03-15");
    assert_eq!(json["clientDateOfBirth"], "1968-06-11");
    assert_eq!(json["incidentCategory"], "Medication");
    assert_eq!(json["fundingSource"], "WMO");
    assert_eq!(json["seriousnessScore"], 1);
    assert_eq!(json["clientId"], "5501");
    assert_eq!(json["isMedicationIncident"], true);
}

#[test]
fn test_fractional_impact_ratings() {
    let score = |client: f64| {
        let raw = RawRecord {
            client_impact: Some(RawValue::Number(client)),
            ..base_row(RawValue::Number(45000.0), RawValue::Number(25000.0))
        };
        process_batch(&[raw]).records.remove(0).seriousness_score.value()
    };
    assert_eq!(score(7.0), 1);
    assert_eq!(score(7.4), 3);
    assert_eq!(score(7.5), 3);
}

#[test]
fn test_year_only_incident_date() {
    let raw = base_row(RawValue::from("2023"), RawValue::Number(25000.0));
    let result = process_batch(&[raw]);
    assert!(result.is_clean());
    assert_eq!(result.records[0].incident_date, ymd(2023, 1, 1));
}
