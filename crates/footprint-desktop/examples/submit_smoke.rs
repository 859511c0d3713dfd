//! Smoke run of the submit pipeline without the Tauri command layer.
//!
//! Validates a known-good submission against the detailed model, renders the
//! summary, and writes the PDF + chart into a temp directory.
//!
//! Usage: `cargo run -p footprint-desktop --example submit_smoke`

use std::collections::BTreeMap;

use footprint_export::render;
use footprint_export::styles::DocumentStyles;
use footprint_export::writer::{self, ExportFormat};

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt().with_env_filter("info").init();

    let entries: BTreeMap<String, String> = [
        ("electricity", "1100"),
        ("natural_gas", "800"),
        ("fuel", "300"),
        ("waste", "50"),
        ("recycled", "20"),
        ("business_km", "5000"),
        ("fuel_efficiency", "9"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let report = footprint_models::evaluate_submission("detailed", &entries)?;
    let summary = render::render_report(&report)?;
    println!("{summary}");

    let out_dir = std::env::temp_dir().join("footprint-smoke");
    let written = writer::write_report(
        &report,
        &summary,
        &DocumentStyles::default(),
        ExportFormat::Pdf,
        &out_dir,
        true,
    )?;

    println!("report: {}", written.report_path.display());
    println!("chart:  {}", written.chart_path.display());
    Ok(())
}
