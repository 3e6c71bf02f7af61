//! AvtoRend storefront
//!
//! Terminal storefront for a car-rental fleet: category tabs, a vehicle
//! grid backed by the rental API, a sliding navigation drawer and runtime
//! language switching.

use std::path::Path;

use avtorend_api::{FleetService, HttpBackend};
use avtorend_app::config::{self, Settings};
use avtorend_core::prelude::*;

pub use avtorend_api as api;
pub use avtorend_app as app;
pub use avtorend_core as core;
pub use avtorend_tui as tui;

/// Command-line overrides applied on top of `.avtorend/config.toml`.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub api_url: Option<String>,
    pub language: Option<String>,
}

/// Settings with command-line overrides applied.
pub fn effective_settings(project_path: &Path, options: &LaunchOptions) -> Settings {
    let mut settings = config::load_settings(project_path);
    if let Some(url) = &options.api_url {
        settings.api.base_url = url.clone();
    }
    settings
}

/// Starting language: `--lang` if supported, else the stored preference,
/// else the configured default.
pub fn starting_language(project_path: &Path, settings: &Settings, options: &LaunchOptions) -> String {
    if let Some(code) = &options.language {
        if settings.locale.supported.iter().any(|s| s == code) {
            return code.clone();
        }
        warn!("--lang {} is not supported, ignoring", code);
    }
    let prefs = config::load_user_preferences(project_path);
    config::resolve_language(settings, prefs.as_ref())
}

/// Main application entry point with a specific project path
pub async fn run_with_project(project_path: &Path, options: LaunchOptions) -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Log to file, the TUI owns stdout
    let log_dir = avtorend_core::logging::init()?;

    info!("═══════════════════════════════════════════════════════");
    info!("AvtoRend starting");
    info!("Project: {}", project_path.display());
    info!("Logs: {}", log_dir.display());
    info!("═══════════════════════════════════════════════════════");

    let settings = effective_settings(project_path, &options);
    let language = starting_language(project_path, &settings, &options);
    let backend = HttpBackend::new(&settings.api.base_url, settings.api.timeout())?;
    info!("API: {} (language '{}')", backend.base_url(), language);

    let result =
        avtorend_tui::run_with_project(project_path, settings, language, FleetService::new(backend))
            .await;

    match &result {
        Err(e) if e.is_fatal() => error!("Fatal: {:?}", e),
        Err(e) => error!("Application error: {:?}", e),
        Ok(()) => {}
    }

    info!("AvtoRend exiting");
    result
}
