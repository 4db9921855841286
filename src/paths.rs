//! Per-user filesystem locations.
//!
//! Trailhead keeps user templates under the platform data directory and the
//! optional substitution-override config under the platform config directory.
//! Both locations can be redirected through environment variables, which is
//! how the integration tests stay hermetic.

use std::path::PathBuf;

/// Environment variable overriding the user template root.
pub const DATA_DIR_ENV: &str = "TRAILHEAD_DATA_DIR";

/// Environment variable overriding the user config directory.
pub const CONFIG_DIR_ENV: &str = "TRAILHEAD_CONFIG_DIR";

/// Resolved per-user paths, discovered once at startup and passed around
/// by reference.
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// Directory holding user templates (one subdirectory per template).
    pub user_templates_dir: PathBuf,
    /// Optional user config file with substitution overrides.
    pub user_config_path: PathBuf,
}

impl AppPaths {
    /// Discover the per-user paths from the environment and platform
    /// conventions.
    pub fn discover() -> Self {
        let data_root = std::env::var_os(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                dirs::data_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("trailhead")
            });

        let config_root = std::env::var_os(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                dirs::config_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("trailhead")
            });

        Self {
            user_templates_dir: data_root.join("templates"),
            user_config_path: config_root.join("config.toml"),
        }
    }
}
