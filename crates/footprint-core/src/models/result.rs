use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Classification of a reading against its reference average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Verdict {
    Within,
    Exceeds,
}

impl Verdict {
    /// A reading exactly equal to the average counts as within.
    pub fn classify(consumed: f64, average: f64) -> Self {
        if consumed > average {
            Verdict::Exceeds
        } else {
            Verdict::Within
        }
    }
}

/// The computed outcome for one category of a submission.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryResult {
    pub category_id: String,
    pub name: String,
    pub unit: String,
    pub consumed: f64,
    pub reference_average: f64,
    pub verdict: Verdict,
    /// Annual emissions in kgCO2; `None` for comparison-only categories.
    pub emissions_kg: Option<f64>,
}
