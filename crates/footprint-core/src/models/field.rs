use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Defines the valid range for a reading. `max` is `None` when the field is
/// unbounded above.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValueRange {
    pub min: f64,
    pub max: Option<f64>,
}

impl ValueRange {
    /// Any finite value ≥ 0 — the default for consumption readings.
    pub const NON_NEGATIVE: ValueRange = ValueRange { min: 0.0, max: None };

    /// A percentage in [0, 100].
    pub const PERCENTAGE: ValueRange = ValueRange {
        min: 0.0,
        max: Some(100.0),
    };

    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && self.max.is_none_or(|max| value <= max)
    }
}

/// One numeric entry of the input form.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InputField {
    pub id: String,
    /// Label shown next to the entry (e.g., "Electricity Bill").
    pub label: String,
    /// Unit suffix for the label (e.g., "euros/month", "kg/month", "%").
    pub unit: String,
    pub range: ValueRange,
    pub description: Option<String>,
}

/// Why a field value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldErrorKind {
    /// The field was absent or empty.
    Missing,
    /// The raw text did not parse as a finite number.
    NotANumber,
    /// The parsed value falls outside the field's range.
    OutOfRange,
}

/// A per-field validation outcome for one rejected entry. The presentation
/// layer consumes these to highlight the offending fields; all fields are
/// checked independently so several errors can surface at once.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct FieldError {
    pub field_id: String,
    /// The raw text as submitted.
    pub raw: String,
    pub kind: FieldErrorKind,
    pub expected_range: ValueRange,
    pub message: String,
}
