//! On-disk artifacts: directory creation, magic bytes, and overwrite
//! behavior of the report writer.

use std::collections::BTreeMap;
use std::fs;

use footprint_core::models::report::FootprintReport;
use footprint_export::render::render_report;
use footprint_export::styles::DocumentStyles;
use footprint_export::writer::{self, ExportFormat};
use footprint_export::{chart, docx, pdf};

fn detailed_report() -> FootprintReport {
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

    footprint_models::evaluate_submission("detailed", &entries).unwrap()
}

#[test]
fn pdf_bytes_carry_the_pdf_magic() {
    let report = detailed_report();
    let rendered = render_report(&report).unwrap();

    let bytes = pdf::generate_pdf(&rendered, &DocumentStyles::default(), None).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn pdf_with_embedded_chart_still_renders() {
    let report = detailed_report();
    let rendered = render_report(&report).unwrap();
    let chart_image = chart::render_overview(&report).unwrap();

    let plain = pdf::generate_pdf(&rendered, &DocumentStyles::default(), None).unwrap();
    let with_chart =
        pdf::generate_pdf(&rendered, &DocumentStyles::default(), Some(&chart_image)).unwrap();

    assert!(with_chart.starts_with(b"%PDF"));
    assert!(with_chart.len() > plain.len());
}

#[test]
fn docx_bytes_are_a_zip_container() {
    let report = detailed_report();
    let rendered = render_report(&report).unwrap();

    let bytes = docx::generate_docx(&rendered, &DocumentStyles::default()).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn chart_buffer_has_the_expected_dimensions() {
    let image = chart::render_overview(&detailed_report()).unwrap();

    assert_eq!(image.width, chart::CHART_WIDTH);
    assert_eq!(image.height, chart::CHART_HEIGHT);
    assert_eq!(image.rgb.len(), (image.width * image.height * 3) as usize);
    // A drawn chart is not a black frame.
    assert!(image.rgb.iter().any(|&b| b != 0));
}

#[test]
fn writer_creates_the_output_directory_and_both_artifacts() {
    let report = detailed_report();
    let rendered = render_report(&report).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("nested").join("reports");

    let written = writer::write_report(
        &report,
        &rendered,
        &DocumentStyles::default(),
        ExportFormat::Pdf,
        &out_dir,
        true,
    )
    .unwrap();

    assert_eq!(
        written.report_path,
        out_dir.join("carbon_footprint_report.pdf")
    );
    assert_eq!(written.chart_path, out_dir.join("chart.png"));

    let pdf_bytes = fs::read(&written.report_path).unwrap();
    assert!(pdf_bytes.starts_with(b"%PDF"));

    let png_bytes = fs::read(&written.chart_path).unwrap();
    assert!(png_bytes.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn writer_overwrites_the_previous_report() {
    let report = detailed_report();
    let rendered = render_report(&report).unwrap();
    let dir = tempfile::tempdir().unwrap();

    let first = writer::write_report(
        &report,
        &rendered,
        &DocumentStyles::default(),
        ExportFormat::Pdf,
        dir.path(),
        false,
    )
    .unwrap();
    let second = writer::write_report(
        &report,
        &rendered,
        &DocumentStyles::default(),
        ExportFormat::Pdf,
        dir.path(),
        false,
    )
    .unwrap();

    assert_eq!(first.report_path, second.report_path);

    // Exactly one report file and one chart remain.
    let names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"carbon_footprint_report.pdf".to_string()));
    assert!(names.contains(&"chart.png".to_string()));
}

#[test]
fn writer_honors_the_docx_format() {
    let report = detailed_report();
    let rendered = render_report(&report).unwrap();
    let dir = tempfile::tempdir().unwrap();

    let written = writer::write_report(
        &report,
        &rendered,
        &DocumentStyles::default(),
        ExportFormat::Docx,
        dir.path(),
        false,
    )
    .unwrap();

    assert_eq!(
        written.report_path,
        dir.path().join("carbon_footprint_report.docx")
    );
    assert!(fs::read(&written.report_path).unwrap().starts_with(b"PK"));
}
