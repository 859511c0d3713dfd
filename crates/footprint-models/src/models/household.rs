use footprint_core::models::category::Category;
use footprint_core::models::field::{InputField, ValueRange};

use crate::EmissionModel;

/// Household Monitor: energy, water, and waste readings compared against
/// fixed household averages. Comparison only — this model carries no
/// conversion factors, so its reports list consumption without emissions.
pub struct HouseholdMonitor;

impl EmissionModel for HouseholdMonitor {
    fn id(&self) -> &str {
        "household"
    }

    fn name(&self) -> &str {
        "Household Monitor"
    }

    fn report_title(&self) -> &str {
        "Carbon Footprint Report"
    }

    fn fields(&self) -> &[InputField] {
        static FIELDS: std::sync::LazyLock<Vec<InputField>> = std::sync::LazyLock::new(|| {
            vec![
                field("energy", "Energy Consumption", "kWh"),
                field("water", "Water Usage", "liters"),
                field("waste", "Waste Produced", "kg"),
            ]
        });
        &FIELDS
    }

    fn categories(&self) -> &[Category] {
        static CATEGORIES: std::sync::LazyLock<Vec<Category>> = std::sync::LazyLock::new(|| {
            vec![
                category("energy", "Energy", 1200.0),
                category("water", "Water", 1500.0),
                category("waste", "Waste", 300.0),
            ]
        });
        &CATEGORIES
    }
}

fn field(id: &str, label: &str, unit: &str) -> InputField {
    InputField {
        id: id.to_string(),
        label: label.to_string(),
        unit: unit.to_string(),
        range: ValueRange::NON_NEGATIVE,
        description: None,
    }
}

fn category(id: &str, name: &str, reference_average: f64) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        reading_field: id.to_string(),
        reference_average,
        formula: None,
    }
}
