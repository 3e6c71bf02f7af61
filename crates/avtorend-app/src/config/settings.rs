//! Loading and saving `.avtorend/` files

use std::io::Write;
use std::path::{Path, PathBuf};

use avtorend_core::prelude::*;
use tempfile::NamedTempFile;

use super::types::{Settings, UserPreferences};

const AVTOREND_DIR: &str = ".avtorend";
const CONFIG_FILENAME: &str = "config.toml";
const LOCAL_SETTINGS_FILENAME: &str = "settings.local.toml";

pub fn config_path(project_path: &Path) -> PathBuf {
    project_path.join(AVTOREND_DIR).join(CONFIG_FILENAME)
}

pub fn preferences_path(project_path: &Path) -> PathBuf {
    project_path.join(AVTOREND_DIR).join(LOCAL_SETTINGS_FILENAME)
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings from .avtorend/config.toml
///
/// Returns default settings if file doesn't exist or can't be parsed.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = config_path(project_path);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

fn ensure_dir(project_path: &Path) -> Result<PathBuf> {
    let dir = project_path.join(AVTOREND_DIR);
    if !dir.exists() {
        std::fs::create_dir_all(&dir)
            .map_err(|e| Error::config(format!("Failed to create .avtorend dir: {}", e)))?;
    }
    Ok(dir)
}

/// Create a commented default `.avtorend/config.toml` if none exists.
pub fn init_config_dir(project_path: &Path) -> Result<()> {
    let dir = ensure_dir(project_path)?;
    let config_path = dir.join(CONFIG_FILENAME);
    if config_path.exists() {
        debug!("Config already present at {:?}", config_path);
        return Ok(());
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
    info!("Created default config at {:?}", config_path);
    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# AvtoRend storefront configuration

[api]
base_url = "http://localhost:8000"
timeout_ms = 10000
page_size = 0               # 0 = backend default

[drawer]
enabled = true
animation_ms = 350
swipe_threshold_px = 100
min_flick_velocity = 0.5    # px/ms
close_on_outside_click = true   # desktop widths only
max_panel_width_px = 320

[viewport]
cell_width_px = 8
cell_height_px = 16
resize_debounce_ms = 250
# touch = true              # unset = AVTOREND_TOUCH
# reduced_motion = true     # unset = AVTOREND_REDUCED_MOTION / NO_MOTION

[locale]
default = "ru"
supported = ["ru", "en"]

[ui]
tick_ms = 50
mouse = true
"#;

// ─────────────────────────────────────────────────────────────────────────────
// Local Settings (User Preferences)
// ─────────────────────────────────────────────────────────────────────────────

/// Load user preferences from .avtorend/settings.local.toml
///
/// Returns None if file doesn't exist (not an error - first run)
pub fn load_user_preferences(project_path: &Path) -> Option<UserPreferences> {
    let prefs_path = preferences_path(project_path);

    if !prefs_path.exists() {
        debug!("No local settings file at {:?}", prefs_path);
        return None;
    }

    match std::fs::read_to_string(&prefs_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(prefs) => Some(prefs),
            Err(e) => {
                warn!("Failed to parse {:?}: {}", prefs_path, e);
                None
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", prefs_path, e);
            None
        }
    }
}

/// Save user preferences to .avtorend/settings.local.toml
///
/// Uses atomic write (uniquely named temp file + rename).
pub fn save_user_preferences(project_path: &Path, prefs: &UserPreferences) -> Result<()> {
    let dir = ensure_dir(project_path)?;
    let prefs_path = dir.join(LOCAL_SETTINGS_FILENAME);

    let header = "# User-specific preferences (not tracked in git)\n\n";
    let content = toml::to_string_pretty(prefs)
        .map_err(|e| Error::config(format!("Failed to serialize preferences: {}", e)))?;

    let mut temp = NamedTempFile::new_in(&dir)
        .map_err(|e| Error::config(format!("Failed to create temp file: {}", e)))?;
    temp.write_all(format!("{}{}", header, content).as_bytes())
        .map_err(|e| Error::config(format!("Failed to write temp file: {}", e)))?;
    temp.persist(&prefs_path)
        .map_err(|e| Error::config(format!("Failed to rename temp file: {}", e)))?;

    debug!("Saved user preferences to {:?}", prefs_path);
    Ok(())
}

/// Persist the chosen language, keeping any other stored preferences.
pub fn save_language(project_path: &Path, code: &str) -> Result<()> {
    let mut prefs = load_user_preferences(project_path).unwrap_or_default();
    prefs.language = Some(code.to_string());
    save_user_preferences(project_path, &prefs)
}

/// Language to start with: stored preference if supported, else the default.
pub fn resolve_language(settings: &Settings, prefs: Option<&UserPreferences>) -> String {
    let stored = prefs.and_then(|p| p.language.as_deref());
    match stored {
        Some(code) if settings.locale.supported.iter().any(|s| s == code) => code.to_string(),
        Some(code) => {
            warn!("Stored language '{}' is not supported, using default", code);
            settings.locale.default.clone()
        }
        None => settings.locale.default.clone(),
    }
}
