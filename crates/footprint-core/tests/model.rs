use footprint_core::models::category::EmissionFormula;
use footprint_core::models::field::{FieldError, FieldErrorKind, ValueRange};
use footprint_core::models::reading::ReadingSet;
use footprint_core::models::result::Verdict;

#[test]
fn non_negative_range_accepts_zero_and_rejects_negatives() {
    let range = ValueRange::NON_NEGATIVE;

    assert!(range.contains(0.0));
    assert!(range.contains(1100.0));
    assert!(!range.contains(-0.01));
}

#[test]
fn ranges_reject_non_finite_values() {
    let range = ValueRange::NON_NEGATIVE;

    assert!(!range.contains(f64::NAN));
    assert!(!range.contains(f64::INFINITY));
    assert!(!range.contains(f64::NEG_INFINITY));
}

#[test]
fn percentage_range_is_inclusive_at_both_bounds() {
    let range = ValueRange::PERCENTAGE;

    assert!(range.contains(0.0));
    assert!(range.contains(100.0));
    assert!(!range.contains(100.1));
    assert!(!range.contains(-1.0));
}

#[test]
fn verdict_equal_to_average_is_within() {
    assert_eq!(Verdict::classify(1100.0, 1100.0), Verdict::Within);
    assert_eq!(Verdict::classify(1099.9, 1100.0), Verdict::Within);
    assert_eq!(Verdict::classify(1100.1, 1100.0), Verdict::Exceeds);
}

#[test]
fn verdict_serializes_snake_case() {
    assert_eq!(
        serde_json::to_value(Verdict::Within).unwrap(),
        serde_json::json!("within")
    );
    assert_eq!(
        serde_json::to_value(Verdict::Exceeds).unwrap(),
        serde_json::json!("exceeds")
    );
}

#[test]
fn emission_formula_uses_tagged_wire_format() {
    let formula = EmissionFormula::MonthlyLinear { kg_per_unit: 2.32 };
    let json = serde_json::to_value(&formula).unwrap();

    assert_eq!(json["type"], "monthly_linear");
    assert_eq!(json["kg_per_unit"], 2.32);
}

#[test]
fn field_error_displays_its_message() {
    let error = FieldError {
        field_id: "waste".to_string(),
        raw: "abc".to_string(),
        kind: FieldErrorKind::NotANumber,
        expected_range: ValueRange::NON_NEGATIVE,
        message: "Waste: 'abc' is not a valid number".to_string(),
    };

    assert_eq!(error.to_string(), "Waste: 'abc' is not a valid number");
}

#[test]
fn reading_set_lookup_by_field_id() {
    let mut readings = ReadingSet::new();
    readings.insert("electricity", 1100.0);

    assert_eq!(readings.get("electricity"), Some(1100.0));
    assert_eq!(readings.get("water"), None);
    assert_eq!(readings.len(), 1);
}
