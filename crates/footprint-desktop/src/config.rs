use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use specta::Type;

use footprint_export::writer::{DEFAULT_OUTPUT_DIR, ExportFormat};

/// Current settings version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version. Missing or 0 = pre-versioned settings.
    #[serde(default)]
    pub config_version: u32,
    /// Where report artifacts are written; `None` means the fixed relative
    /// `reports/` directory.
    pub output_dir: Option<PathBuf>,
    /// Id of the emission model the form starts on.
    pub model_id: String,
    /// Added in v1; older settings get the default.
    #[serde(default)]
    pub export_format: ExportFormat,
    /// Added in v1.
    #[serde(default = "default_embed_chart")]
    pub embed_chart: bool,
    pub created_at: jiff::Timestamp,
}

fn default_embed_chart() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            output_dir: None,
            model_id: "detailed".to_string(),
            export_format: ExportFormat::default(),
            embed_chart: true,
            created_at: jiff::Timestamp::now(),
        }
    }
}

impl Settings {
    pub fn resolved_output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }
}

/// Settings view sent to the frontend.
#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct SettingsInfo {
    pub output_dir: String,
    pub model_id: String,
    pub export_format: String,
    pub embed_chart: bool,
    pub created_at: String,
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.footprint.desktop"))
}

fn settings_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("settings.json"))
}

pub fn has_settings() -> bool {
    settings_path().map(|p| p.exists()).unwrap_or(false)
}

pub fn load_settings() -> eyre::Result<Settings> {
    let path = settings_path()?;
    let contents = std::fs::read_to_string(&path)
        .map_err(|e| eyre::eyre!("failed to read settings at {}: {e}", path.display()))?;

    // Parse as raw JSON so migrations can run before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let settings: Settings = serde_json::from_value(migrated)?;
    Ok(settings)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update Footprint."
        ));
    }

    // v0 → v1: add export_format and embed_chart
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("settings file is not a JSON object"))?;
        obj.entry("export_format")
            .or_insert(serde_json::Value::String("pdf".to_string()));
        obj.entry("embed_chart").or_insert(serde_json::Value::Bool(true));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated settings v0 → v1 (added export_format, embed_chart)");
    }

    // Future migrations go here:
    // if from_version < 2 { ... }

    Ok(json)
}

pub fn save_settings(settings: &Settings) -> eyre::Result<()> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = settings.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = dir.join("settings.json");
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = dir.join("settings.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "settings saved");
    Ok(())
}

pub fn settings_info(settings: &Settings) -> SettingsInfo {
    SettingsInfo {
        output_dir: settings.resolved_output_dir().display().to_string(),
        model_id: settings.model_id.clone(),
        export_format: settings.export_format.extension().to_string(),
        embed_chart: settings.embed_chart,
        created_at: settings.created_at.to_string(),
    }
}
