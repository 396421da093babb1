use crate::api::{VitrineApi, VitrinePaths};
use crate::config::VitrineConfig;
use crate::error::{Result, VitrineError};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;

/// Overrides the data directory when set.
pub const HOME_ENV: &str = "VITRINE_HOME";

pub struct VitrineContext {
    pub api: VitrineApi<FileStore>,
    pub config: VitrineConfig,
}

/// Where catalog and config live: `$VITRINE_HOME`, else the platform data dir.
pub fn data_dir(home_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(home) = home_override.filter(|p| !p.as_os_str().is_empty()) {
        return Ok(home);
    }
    ProjectDirs::from("dev", "vitrine", "vitrine")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| VitrineError::Store("Could not determine a data directory".to_string()))
}

pub fn initialize(home_override: Option<PathBuf>) -> Result<VitrineContext> {
    let data_dir = data_dir(home_override)?;
    let config = VitrineConfig::load(&data_dir)?;
    let store = FileStore::new(data_dir.clone());
    let api = VitrineApi::new(store, VitrinePaths { data_dir });
    Ok(VitrineContext { api, config })
}
