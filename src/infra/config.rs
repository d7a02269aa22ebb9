use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use tracing::warn;

use crate::domain::entities::query::DEFAULT_PAGE_SIZE;
use crate::usecase::services::swipe::{DEFAULT_HAPTIC_PULSE, DEFAULT_SWIPE_THRESHOLD};

/// Overrides the config file location.
pub const CONFIG_PATH_ENV_VAR: &str = "ESTATE_DASHBOARD_CONFIG";

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub list: ListConfig,
    pub swipe: SwipeConfig,
    pub data: DataConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    pub page_size: i64,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    /// Minimum travel along the dominant axis, in device-independent pixels.
    pub threshold: f64,
    pub haptic_pulse_ms: u64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SWIPE_THRESHOLD,
            haptic_pulse_ms: DEFAULT_HAPTIC_PULSE.as_millis() as u64,
        }
    }
}

impl SwipeConfig {
    pub fn haptic_pulse(&self) -> Duration {
        Duration::from_millis(self.haptic_pulse_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding the dataset files. Defaults to the app data dir.
    pub data_dir: Option<PathBuf>,
}

impl DashboardConfig {
    /// Replaces values list views cannot work with by their defaults.
    pub fn validated(mut self) -> Self {
        if self.list.page_size < 1 {
            warn!(
                page_size = self.list.page_size,
                "page_size must be at least 1, using default"
            );
            self.list.page_size = DEFAULT_PAGE_SIZE;
        }
        if self.swipe.threshold.is_nan() || self.swipe.threshold <= 0.0 {
            warn!(
                threshold = self.swipe.threshold,
                "swipe threshold must be positive, using default"
            );
            self.swipe.threshold = DEFAULT_SWIPE_THRESHOLD;
        }
        self
    }

    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.data.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(project_dirs()?.data_local_dir().to_path_buf()),
        }
    }
}

pub fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "hellhbbd", "estate-dashboard")
        .ok_or_else(|| anyhow!("unable to resolve project directories"))
}

pub fn default_config_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }
    Ok(project_dirs()?.config_dir().join("config.toml"))
}

/// Reads the config file; a missing file yields the defaults.
pub fn load_config(config_path: &Path) -> Result<DashboardConfig> {
    if !config_path.exists() {
        return Ok(DashboardConfig::default());
    }

    let text = std::fs::read_to_string(config_path)
        .with_context(|| format!("failed to read config: {}", config_path.display()))?;
    let config: DashboardConfig = toml::from_str(&text)
        .with_context(|| format!("failed to parse config: {}", config_path.display()))?;
    Ok(config.validated())
}

pub fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}
