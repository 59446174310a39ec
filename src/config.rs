use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Slots in the per-pass process table. Fixed; the table never resizes.
    pub process_table_capacity: usize,
    /// Buckets in the per-pass filesystem table.
    pub fs_bucket_count: usize,
    /// Mount enumeration cap per pass.
    pub max_mounts: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            process_table_capacity: 1024,
            fs_bucket_count: 100,
            max_mounts: 10,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Rows shown in the process table; 0 shows everything.
    pub top_processes: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig { top_processes: 20 }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("syslens").join("config.toml"))
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => Config::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_default(),
        Err(_) => Config::default(),
    }
}
