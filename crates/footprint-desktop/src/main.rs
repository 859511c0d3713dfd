#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eyre::Result;

mod commands;
mod state;

use footprint_desktop::config;

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let settings = if config::has_settings() {
        config::load_settings().unwrap_or_else(|e| {
            tracing::warn!("failed to load settings, using defaults: {e}");
            config::Settings::default()
        })
    } else {
        config::Settings::default()
    };

    tauri::Builder::default()
        .manage(state::DesktopState::new(settings))
        .invoke_handler(tauri::generate_handler![
            commands::list_models,
            commands::submit,
            commands::load_settings,
            commands::save_settings,
            commands::choose_output_dir,
        ])
        .run(tauri::generate_context!())
        .map_err(|e| eyre::eyre!("tauri error: {e}"))?;

    Ok(())
}
