use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::favorites::DEFAULT_FAVORITES_KEY;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigPathError {
    MissingHomeDirectory,
}

const APP_DIR: &str = "cat-gallery";
const APP_CONFIG_FILE: &str = "config.json";
const DEFAULT_SEARCH_DELAY_MS: u64 = 600;

/// Gallery settings from `config.json`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Simulated search latency before results are committed.
    pub search_delay_ms: u64,
    pub favorites_key: String,
    /// JSON catalog resource; the built-in catalog is used when unset.
    pub catalog_path: Option<PathBuf>,
    /// Directory holding the favorites slot; XDG data home when unset.
    pub data_dir: Option<PathBuf>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            search_delay_ms: DEFAULT_SEARCH_DELAY_MS,
            favorites_key: DEFAULT_FAVORITES_KEY.to_string(),
            catalog_path: None,
            data_dir: None,
        }
    }
}

impl GalleryConfig {
    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }
}

pub fn load_gallery_config() -> GalleryConfig {
    let (xdg_config_home, home) = config_env_dirs();
    load_gallery_config_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_gallery_config_with(xdg_config_home: Option<&Path>, home: Option<&Path>) -> GalleryConfig {
    let path = match app_config_path(APP_DIR, APP_CONFIG_FILE, xdg_config_home, home) {
        Ok(p) => p,
        Err(_) => return GalleryConfig::default(),
    };
    if !path.exists() {
        return GalleryConfig::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
            tracing::warn!(?err, ?path, "failed to parse config.json; using defaults");
            GalleryConfig::default()
        }),
        Err(err) => {
            tracing::warn!(?err, ?path, "failed to read config.json; using defaults");
            GalleryConfig::default()
        }
    }
}

pub(crate) fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

pub(crate) fn app_config_path(
    app_dir: &str,
    file_name: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    let mut path = config_root(xdg_config_home, home)?;
    path.push(app_dir);
    path.push(file_name);
    Ok(path)
}

fn config_root(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(ConfigPathError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}
