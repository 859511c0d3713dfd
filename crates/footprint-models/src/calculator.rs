//! Submission parsing and emission arithmetic.
//!
//! Everything here is a pure function of its inputs: raw entries in,
//! per-field outcomes out; validated readings in, computed results out. The
//! conversion factors live on the model definitions, not in this module.

use std::collections::BTreeMap;

use footprint_core::models::category::{Category, EmissionFormula};
use footprint_core::models::field::{FieldError, FieldErrorKind, InputField};
use footprint_core::models::reading::ReadingSet;
use footprint_core::models::report::FootprintReport;
use footprint_core::models::result::{CategoryResult, Verdict};

use crate::EmissionModel;
use crate::error::ModelError;

/// Parse one raw form submission against a field list. Each field is checked
/// independently; the returned reading set holds the fields that passed and
/// the error list holds one entry per rejected field.
pub fn parse_submission(
    fields: &[InputField],
    entries: &BTreeMap<String, String>,
) -> (ReadingSet, Vec<FieldError>) {
    let mut readings = ReadingSet::new();
    let mut errors = Vec::new();

    for field in fields {
        let raw = entries.get(&field.id).map(String::as_str).unwrap_or("");
        match parse_field(field, raw) {
            Ok(value) => readings.insert(field.id.clone(), value),
            Err(error) => errors.push(error),
        }
    }

    (readings, errors)
}

fn parse_field(field: &InputField, raw: &str) -> Result<f64, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(field_error(field, raw, FieldErrorKind::Missing));
    }

    let value: f64 = match trimmed.parse() {
        Ok(value) if f64::is_finite(value) => value,
        _ => return Err(field_error(field, raw, FieldErrorKind::NotANumber)),
    };

    if !field.range.contains(value) {
        return Err(field_error(field, raw, FieldErrorKind::OutOfRange));
    }

    Ok(value)
}

fn field_error(field: &InputField, raw: &str, kind: FieldErrorKind) -> FieldError {
    let message = match kind {
        FieldErrorKind::Missing => format!("{}: a value is required", field.label),
        FieldErrorKind::NotANumber => {
            format!("{}: '{}' is not a valid number", field.label, raw.trim())
        }
        FieldErrorKind::OutOfRange => match field.range.max {
            Some(max) => format!(
                "{}: value must be between {} and {} {}",
                field.label, field.range.min, max, field.unit,
            ),
            None => format!(
                "{}: value must be at least {} {}",
                field.label, field.range.min, field.unit,
            ),
        },
    };

    FieldError {
        field_id: field.id.clone(),
        raw: raw.to_string(),
        kind,
        expected_range: field.range,
        message,
    }
}

/// Annual kgCO2 for one category, or `None` for comparison-only categories.
pub fn category_emission(
    category: &Category,
    readings: &ReadingSet,
) -> Result<Option<f64>, ModelError> {
    let consumed = reading_for(category, &category.reading_field, readings)?;

    let emission = match &category.formula {
        None => return Ok(None),
        Some(EmissionFormula::MonthlyLinear { kg_per_unit }) => consumed * 12.0 * kg_per_unit,
        Some(EmissionFormula::MonthlyWaste {
            base_kg_per_kg,
            recycled_field,
        }) => {
            let recycled_pct = reading_for(category, recycled_field, readings)?;
            // The factor crosses zero once the recycled share exceeds the
            // base; a landfill credit is not a thing, so floor at zero.
            let factor = (base_kg_per_kg - recycled_pct / 100.0).max(0.0);
            consumed * 12.0 * factor
        }
        Some(EmissionFormula::DistancePerLitre {
            kg_per_litre,
            efficiency_field,
        }) => {
            let efficiency = reading_for(category, efficiency_field, readings)?;
            consumed * (1.0 / efficiency) * kg_per_litre
        }
    };

    Ok(Some(emission))
}

fn reading_for(
    category: &Category,
    field_id: &str,
    readings: &ReadingSet,
) -> Result<f64, ModelError> {
    readings
        .get(field_id)
        .ok_or_else(|| ModelError::MissingReading {
            category_id: category.id.clone(),
            field_id: field_id.to_string(),
        })
}

/// Compute the full report for a validated reading set: one result per
/// category plus the total, which is the exact sum of the per-category
/// emissions.
pub fn assess<M: EmissionModel + ?Sized>(
    model: &M,
    readings: &ReadingSet,
) -> Result<FootprintReport, ModelError> {
    let mut results = Vec::with_capacity(model.categories().len());

    for category in model.categories() {
        let consumed = reading_for(category, &category.reading_field, readings)?;
        let emissions_kg = category_emission(category, readings)?;
        let unit = model
            .fields()
            .iter()
            .find(|f| f.id == category.reading_field)
            .map(|f| f.unit.clone())
            .unwrap_or_default();

        results.push(CategoryResult {
            category_id: category.id.clone(),
            name: category.name.clone(),
            unit,
            consumed,
            reference_average: category.reference_average,
            verdict: Verdict::classify(consumed, category.reference_average),
            emissions_kg,
        });
    }

    let total_emissions_kg = results.iter().filter_map(|r| r.emissions_kg).sum();

    Ok(FootprintReport {
        model_id: model.id().to_string(),
        model_name: model.name().to_string(),
        title: model.report_title().to_string(),
        generated_at: jiff::Timestamp::now(),
        readings: readings.clone(),
        results,
        total_emissions_kg,
    })
}
