//! Submission validation: every field is checked independently, so one
//! submission can surface several errors at once, and no computation runs
//! until the whole submission is clean.

use std::collections::BTreeMap;

use footprint_core::models::field::FieldErrorKind;
use footprint_models::error::ModelError;
use footprint_models::{evaluate_submission, get_model};

fn entries(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn detailed_entries() -> BTreeMap<String, String> {
    entries(&[
        ("electricity", "1100"),
        ("natural_gas", "800"),
        ("fuel", "300"),
        ("waste", "50"),
        ("recycled", "20"),
        ("business_km", "5000"),
        ("fuel_efficiency", "9"),
    ])
}

#[test]
fn clean_submission_yields_all_readings_and_no_errors() {
    let model = get_model("detailed").unwrap();
    let (readings, errors) = model.validate(&detailed_entries());

    assert!(errors.is_empty());
    assert_eq!(readings.len(), 7);
    assert_eq!(readings.get("electricity"), Some(1100.0));
    assert_eq!(readings.get("recycled"), Some(20.0));
}

#[test]
fn values_are_trimmed_before_parsing() {
    let mut submission = detailed_entries();
    submission.insert("waste".to_string(), "  42.5 ".to_string());

    let model = get_model("detailed").unwrap();
    let (readings, errors) = model.validate(&submission);

    assert!(errors.is_empty());
    assert_eq!(readings.get("waste"), Some(42.5));
}

#[test]
fn missing_and_empty_fields_are_reported() {
    let mut submission = detailed_entries();
    submission.remove("fuel");
    submission.insert("waste".to_string(), "   ".to_string());

    let model = get_model("detailed").unwrap();
    let (_, errors) = model.validate(&submission);

    assert_eq!(errors.len(), 2);
    assert!(
        errors
            .iter()
            .all(|e| e.kind == FieldErrorKind::Missing)
    );
}

#[test]
fn non_numeric_and_negative_fields_are_reported_together() {
    let mut submission = detailed_entries();
    submission.insert("electricity".to_string(), "abc".to_string());
    submission.insert("waste".to_string(), "-5".to_string());

    let model = get_model("detailed").unwrap();
    let (_, errors) = model.validate(&submission);

    assert_eq!(errors.len(), 2);

    let electricity = errors.iter().find(|e| e.field_id == "electricity").unwrap();
    assert_eq!(electricity.kind, FieldErrorKind::NotANumber);
    assert_eq!(electricity.raw, "abc");

    let waste = errors.iter().find(|e| e.field_id == "waste").unwrap();
    assert_eq!(waste.kind, FieldErrorKind::OutOfRange);
}

#[test]
fn non_finite_input_is_not_a_number() {
    let mut submission = detailed_entries();
    submission.insert("fuel".to_string(), "inf".to_string());

    let model = get_model("detailed").unwrap();
    let (_, errors) = model.validate(&submission);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, FieldErrorKind::NotANumber);
}

#[test]
fn recycled_percentage_is_bounded() {
    let model = get_model("detailed").unwrap();

    let mut submission = detailed_entries();
    submission.insert("recycled".to_string(), "101".to_string());
    let (_, errors) = model.validate(&submission);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field_id, "recycled");
    assert_eq!(errors[0].kind, FieldErrorKind::OutOfRange);

    submission.insert("recycled".to_string(), "100".to_string());
    let (_, errors) = model.validate(&submission);
    assert!(errors.is_empty());
}

#[test]
fn zero_fuel_efficiency_is_rejected_before_computation() {
    let mut submission = detailed_entries();
    submission.insert("fuel_efficiency".to_string(), "0".to_string());

    let model = get_model("detailed").unwrap();
    let (_, errors) = model.validate(&submission);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field_id, "fuel_efficiency");
    assert_eq!(errors[0].kind, FieldErrorKind::OutOfRange);
}

#[test]
fn invalid_submission_never_produces_a_report() {
    let mut submission = detailed_entries();
    submission.insert("electricity".to_string(), "-1".to_string());

    let result = evaluate_submission("detailed", &submission);

    match result {
        Err(ModelError::Validation(errors)) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field_id, "electricity");
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn unknown_model_is_rejected() {
    let result = evaluate_submission("office", &detailed_entries());
    assert!(matches!(result, Err(ModelError::UnknownModel(id)) if id == "office"));
}
