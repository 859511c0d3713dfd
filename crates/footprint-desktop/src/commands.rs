use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;
use tauri::State;

use footprint_core::models::field::{FieldError, InputField};
use footprint_core::models::report::FootprintReport;
use footprint_desktop::config::{self, SettingsInfo};
use footprint_export::render;
use footprint_export::styles::DocumentStyles;
use footprint_export::writer::{self, ExportFormat};

use crate::state::DesktopState;

#[derive(Debug, Clone, Serialize)]
pub struct ModelInfo {
    pub id: String,
    pub name: String,
    pub fields: Vec<InputField>,
}

/// Outcome of one form submission. On validation failure nothing is computed
/// or written; the frontend highlights every offending field at once.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmitOutcome {
    Invalid {
        field_errors: Vec<FieldError>,
    },
    Complete {
        report: FootprintReport,
        summary: String,
        report_path: String,
        chart_path: String,
    },
}

#[tauri::command]
pub fn list_models() -> Vec<ModelInfo> {
    footprint_models::all_models()
        .iter()
        .map(|m| ModelInfo {
            id: m.id().to_string(),
            name: m.name().to_string(),
            fields: m.fields().to_vec(),
        })
        .collect()
}

#[tauri::command]
pub fn submit(
    state: State<'_, DesktopState>,
    model_id: String,
    entries: BTreeMap<String, String>,
) -> Result<SubmitOutcome, String> {
    let model = footprint_models::get_model(&model_id)
        .ok_or_else(|| format!("unknown model: {model_id}"))?;

    let (readings, field_errors) = model.validate(&entries);
    if !field_errors.is_empty() {
        return Ok(SubmitOutcome::Invalid { field_errors });
    }

    let report = model.assess(&readings).map_err(|e| e.to_string())?;
    let summary = render::render_report(&report).map_err(|e| e.to_string())?;

    let (out_dir, format, embed_chart) = {
        let settings = state
            .settings
            .lock()
            .map_err(|_| "settings lock poisoned".to_string())?;
        (
            settings.resolved_output_dir(),
            settings.export_format,
            settings.embed_chart,
        )
    };

    let written = writer::write_report(
        &report,
        &summary,
        &DocumentStyles::default(),
        format,
        &out_dir,
        embed_chart,
    )
    .map_err(|e| e.to_string())?;

    Ok(SubmitOutcome::Complete {
        report,
        summary,
        report_path: written.report_path.display().to_string(),
        chart_path: written.chart_path.display().to_string(),
    })
}

#[tauri::command]
pub fn load_settings(state: State<'_, DesktopState>) -> Result<SettingsInfo, String> {
    let settings = state
        .settings
        .lock()
        .map_err(|_| "settings lock poisoned".to_string())?;
    Ok(config::settings_info(&settings))
}

#[tauri::command]
pub fn save_settings(
    state: State<'_, DesktopState>,
    output_dir: Option<String>,
    model_id: String,
    export_format: String,
    embed_chart: bool,
) -> Result<SettingsInfo, String> {
    let mut settings = state
        .settings
        .lock()
        .map_err(|_| "settings lock poisoned".to_string())?;

    settings.output_dir = output_dir.map(PathBuf::from);
    settings.model_id = model_id;
    settings.export_format = match export_format.as_str() {
        "docx" => ExportFormat::Docx,
        _ => ExportFormat::Pdf,
    };
    settings.embed_chart = embed_chart;

    config::save_settings(&settings).map_err(|e| e.to_string())?;
    Ok(config::settings_info(&settings))
}

#[tauri::command]
pub fn choose_output_dir() -> Option<String> {
    rfd::FileDialog::new()
        .pick_folder()
        .map(|p| p.display().to_string())
}
