//! Configuration file parsing for AvtoRend
//!
//! Supports:
//! - `.avtorend/config.toml` - Project settings
//! - `.avtorend/settings.local.toml` - User preferences (language)

pub mod settings;
pub mod types;

pub use settings::{
    config_path, init_config_dir, load_settings, load_user_preferences, preferences_path,
    resolve_language, save_language, save_user_preferences,
};
pub use types::*;
