use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::reading::ReadingSet;
use super::result::CategoryResult;

/// The aggregate of one submission: every reading, every category result, and
/// the total. Recomputed from scratch each time — there is no retained history.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FootprintReport {
    pub model_id: String,
    pub model_name: String,
    /// Heading printed at the top of the generated document.
    pub title: String,
    pub generated_at: jiff::Timestamp,
    pub readings: ReadingSet,
    pub results: Vec<CategoryResult>,
    /// Exact sum of the per-category emissions.
    pub total_emissions_kg: f64,
}
