//! footprint-models
//!
//! Emission model definitions. Pure data plus arithmetic — no UI dependency.
//! Each model defines the input fields, consumption categories, reference
//! averages, and conversion-factor tables; the shared calculator turns a raw
//! form submission into validated readings and a computed report.

pub mod calculator;
pub mod error;
pub mod models;

use std::collections::BTreeMap;

use footprint_core::models::category::Category;
use footprint_core::models::field::{FieldError, InputField};
use footprint_core::models::reading::ReadingSet;
use footprint_core::models::report::FootprintReport;

use error::ModelError;

/// Trait implemented by each footprint model.
pub trait EmissionModel: Send + Sync {
    /// Unique identifier for this model (e.g., "household", "detailed").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "Household Monitor").
    fn name(&self) -> &str;

    /// Heading for generated reports.
    fn report_title(&self) -> &str;

    /// The input fields this model collects.
    fn fields(&self) -> &[InputField];

    /// The consumption categories this model reports on.
    fn categories(&self) -> &[Category];

    /// Parse and validate one raw form submission against this model's
    /// fields. Every field is checked independently, so multiple errors can
    /// be reported at once.
    fn validate(&self, entries: &BTreeMap<String, String>) -> (ReadingSet, Vec<FieldError>) {
        calculator::parse_submission(self.fields(), entries)
    }

    /// Compute per-category emissions, comparison verdicts, and the total for
    /// a fully validated reading set.
    fn assess(&self, readings: &ReadingSet) -> Result<FootprintReport, ModelError> {
        calculator::assess(self, readings)
    }
}

/// Return all registered models.
pub fn all_models() -> Vec<Box<dyn EmissionModel>> {
    vec![
        Box::new(models::detailed::DetailedFootprint),
        Box::new(models::household::HouseholdMonitor),
    ]
}

/// Look up a model by ID.
pub fn get_model(id: &str) -> Option<Box<dyn EmissionModel>> {
    all_models().into_iter().find(|m| m.id() == id)
}

/// Validate and assess one raw submission in a single step. Fails with the
/// full list of per-field errors when any entry is rejected; the computation
/// never runs on a partially valid submission.
pub fn evaluate_submission(
    model_id: &str,
    entries: &BTreeMap<String, String>,
) -> Result<FootprintReport, ModelError> {
    let model =
        get_model(model_id).ok_or_else(|| ModelError::UnknownModel(model_id.to_string()))?;
    let (readings, errors) = model.validate(entries);
    if !errors.is_empty() {
        return Err(ModelError::Validation(errors));
    }
    model.assess(&readings)
}
