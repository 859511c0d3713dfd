use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How a category derives its annual kgCO2 emission from a reading. The
/// conversion factors are configuration data on the emission model, not code
/// paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum EmissionFormula {
    /// Monthly reading: `reading × 12 × kg_per_unit`.
    MonthlyLinear { kg_per_unit: f64 },
    /// Monthly waste mass with a recycled/composted share read from another
    /// field: `mass × 12 × (base_kg_per_kg − recycled_pct/100)`, floored at
    /// zero once the recycled share cancels the base factor.
    MonthlyWaste {
        base_kg_per_kg: f64,
        recycled_field: String,
    },
    /// Annual distance with vehicle fuel efficiency (L/100km) read from
    /// another field: `distance × (1/efficiency) × kg_per_litre`.
    DistancePerLitre {
        kg_per_litre: f64,
        efficiency_field: String,
    },
}

/// A reported consumption category: which field it reads, the baseline it is
/// compared against, and (optionally) how it converts to emissions. A category
/// without a formula contributes consumption and comparison lines only.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Id of the [`super::InputField`] this category reads.
    pub reading_field: String,
    /// Baseline used only for the exceeds/within comparison; it never affects
    /// the emission math.
    pub reference_average: f64,
    pub formula: Option<EmissionFormula>,
}
