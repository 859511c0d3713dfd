use serde::Serialize;
use tera::{Context, Tera};

use footprint_core::models::report::FootprintReport;
use footprint_core::models::result::{CategoryResult, Verdict};

use crate::error::ExportError;

/// Built-in report template. The output uses the small markdown subset that
/// [`crate::pdf`] and [`crate::docx`] understand: `#`/`##` headings, `-`
/// bullets, `**bold**`.
// TODO: add per-category reduction suggestions once the guidance copy exists.
const REPORT_TEMPLATE: &str = "\
# {{ title }}

Generated {{ generated_at }} with the {{ model_name }} model.

{% for entry in entries %}## {{ entry.name }}
- Consumed: {{ entry.consumed }}
- Average: {{ entry.average }}
{% if entry.emissions %}- Emissions (kgCO2): {{ entry.emissions }}
{% endif %}{{ entry.verdict_line }}

{% endfor %}**Total Emissions (kgCO2): {{ total_emissions }}**
";

#[derive(Serialize)]
struct ReportView {
    title: String,
    generated_at: String,
    model_name: String,
    entries: Vec<EntryView>,
    total_emissions: String,
}

#[derive(Serialize)]
struct EntryView {
    name: String,
    consumed: String,
    average: String,
    /// Preformatted so `0.00` still renders; tera treats the float 0 as falsy.
    emissions: Option<String>,
    verdict_line: String,
}

/// Render the report body for display and for document layout.
pub fn render_report(report: &FootprintReport) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template("report", REPORT_TEMPLATE)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let view = build_view(report);
    let value = serde_json::to_value(&view)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render("report", &context)?;
    Ok(rendered)
}

fn build_view(report: &FootprintReport) -> ReportView {
    ReportView {
        title: report.title.clone(),
        generated_at: report
            .generated_at
            .strftime("%Y-%m-%d %H:%M UTC")
            .to_string(),
        model_name: report.model_name.clone(),
        entries: report.results.iter().map(entry_view).collect(),
        total_emissions: format!("{:.2}", report.total_emissions_kg),
    }
}

fn entry_view(result: &CategoryResult) -> EntryView {
    let relation = match result.verdict {
        Verdict::Exceeds => "exceeds",
        Verdict::Within => "is within",
    };

    EntryView {
        name: result.name.clone(),
        consumed: format!("{} {}", format_quantity(result.consumed), result.unit),
        average: format!(
            "{} {}",
            format_quantity(result.reference_average),
            result.unit
        ),
        emissions: result.emissions_kg.map(|kg| format!("{kg:.2}")),
        verdict_line: format!(
            "Your {} {} the average.",
            result.name.to_lowercase(),
            relation
        ),
    }
}

fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}
