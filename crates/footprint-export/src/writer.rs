//! Writes the report artifacts into the output directory: the chart overview
//! PNG and the report document itself. The directory is created on demand and
//! existing artifacts are overwritten on every submission.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use footprint_core::models::report::FootprintReport;

use crate::error::ExportError;
use crate::styles::DocumentStyles;
use crate::{chart, docx, pdf};

pub const REPORT_BASENAME: &str = "carbon_footprint_report";
pub const CHART_FILE: &str = "chart.png";

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "reports";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    #[default]
    Pdf,
    Docx,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
        }
    }
}

/// Paths of the artifacts produced by one submission.
#[derive(Debug, Clone)]
pub struct WrittenReport {
    pub report_path: PathBuf,
    pub chart_path: PathBuf,
}

/// Write the chart PNG and the report document for one submission. The
/// document is written to a temp file and renamed into place, so a failed
/// write never clobbers the previous report.
pub fn write_report(
    report: &FootprintReport,
    rendered: &str,
    styles: &DocumentStyles,
    format: ExportFormat,
    out_dir: &Path,
    embed_chart: bool,
) -> Result<WrittenReport, ExportError> {
    fs::create_dir_all(out_dir)?;

    let chart_path = out_dir.join(CHART_FILE);
    chart::write_overview_png(&chart_path, report)?;

    let bytes = match format {
        ExportFormat::Pdf => {
            let chart_image = if embed_chart {
                Some(chart::render_overview(report)?)
            } else {
                None
            };
            pdf::generate_pdf(rendered, styles, chart_image.as_ref())?
        }
        ExportFormat::Docx => docx::generate_docx(rendered, styles)?,
    };

    let file_name = format!("{REPORT_BASENAME}.{}", format.extension());
    let report_path = out_dir.join(&file_name);
    let tmp_path = out_dir.join(format!("{file_name}.tmp"));
    fs::write(&tmp_path, &bytes)?;
    fs::rename(&tmp_path, &report_path)?;

    tracing::info!(
        path = %report_path.display(),
        bytes = bytes.len(),
        "report written"
    );

    Ok(WrittenReport {
        report_path,
        chart_path,
    })
}
