use footprint_core::models::category::{Category, EmissionFormula};
use footprint_core::models::field::{InputField, ValueRange};

use crate::EmissionModel;

/// Detailed Footprint: monthly spend on electricity, natural gas, and
/// transport fuel, monthly waste mass with a recycled/composted share, and
/// annual business travel with vehicle fuel efficiency. All five categories
/// convert to annual kgCO2 via fixed linear factors.
pub struct DetailedFootprint;

impl EmissionModel for DetailedFootprint {
    fn id(&self) -> &str {
        "detailed"
    }

    fn name(&self) -> &str {
        "Detailed Footprint"
    }

    fn report_title(&self) -> &str {
        "Carbon Footprint Report"
    }

    fn fields(&self) -> &[InputField] {
        static FIELDS: std::sync::LazyLock<Vec<InputField>> = std::sync::LazyLock::new(|| {
            vec![
                field(
                    "electricity",
                    "Electricity Bill",
                    "euros/month",
                    ValueRange::NON_NEGATIVE,
                ),
                field(
                    "natural_gas",
                    "Natural Gas Bill",
                    "euros/month",
                    ValueRange::NON_NEGATIVE,
                ),
                field(
                    "fuel",
                    "Transportation Fuel Bill",
                    "euros/month",
                    ValueRange::NON_NEGATIVE,
                ),
                field("waste", "Waste", "kg/month", ValueRange::NON_NEGATIVE),
                field(
                    "recycled",
                    "Recycled/Composted Waste",
                    "%",
                    ValueRange::PERCENTAGE,
                ),
                field(
                    "business_km",
                    "Business Travel Distance",
                    "km/year",
                    ValueRange::NON_NEGATIVE,
                ),
                // Lower bound keeps the travel formula's reciprocal defined.
                field(
                    "fuel_efficiency",
                    "Vehicle Fuel Efficiency",
                    "L/100km",
                    ValueRange {
                        min: 1.0,
                        max: None,
                    },
                ),
            ]
        });
        &FIELDS
    }

    fn categories(&self) -> &[Category] {
        static CATEGORIES: std::sync::LazyLock<Vec<Category>> = std::sync::LazyLock::new(|| {
            vec![
                Category {
                    id: "electricity".to_string(),
                    name: "Electricity".to_string(),
                    reading_field: "electricity".to_string(),
                    reference_average: 1100.0,
                    formula: Some(EmissionFormula::MonthlyLinear {
                        kg_per_unit: 0.0005,
                    }),
                },
                Category {
                    id: "natural_gas".to_string(),
                    name: "Natural Gas".to_string(),
                    reading_field: "natural_gas".to_string(),
                    reference_average: 800.0,
                    formula: Some(EmissionFormula::MonthlyLinear {
                        kg_per_unit: 0.0053,
                    }),
                },
                Category {
                    id: "fuel".to_string(),
                    name: "Fuel".to_string(),
                    reading_field: "fuel".to_string(),
                    reference_average: 300.0,
                    formula: Some(EmissionFormula::MonthlyLinear { kg_per_unit: 2.32 }),
                },
                Category {
                    id: "waste".to_string(),
                    name: "Waste".to_string(),
                    reading_field: "waste".to_string(),
                    reference_average: 50.0,
                    formula: Some(EmissionFormula::MonthlyWaste {
                        base_kg_per_kg: 0.57,
                        recycled_field: "recycled".to_string(),
                    }),
                },
                Category {
                    id: "business_travel".to_string(),
                    name: "Business Travel".to_string(),
                    reading_field: "business_km".to_string(),
                    reference_average: 5000.0,
                    formula: Some(EmissionFormula::DistancePerLitre {
                        kg_per_litre: 2.31,
                        efficiency_field: "fuel_efficiency".to_string(),
                    }),
                },
            ]
        });
        &CATEGORIES
    }
}

fn field(id: &str, label: &str, unit: &str, range: ValueRange) -> InputField {
    InputField {
        id: id.to_string(),
        label: label.to_string(),
        unit: unit.to_string(),
        range,
        description: None,
    }
}
