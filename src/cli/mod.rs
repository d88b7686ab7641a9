pub mod commands;
pub mod serve;
pub mod summary;
pub mod sites;

pub use commands::{Cli, Commands};

use std::path::{Path, PathBuf};
use crate::config::{parse_config, DashboardConfig};
use crate::errors::DashboardError;
use crate::store::RecordStore;

pub const DEFAULT_DATASET: &str = "spacex_launch_dash.csv";

/// Load the config file when one was given, otherwise use defaults.
pub async fn load_config(path: Option<&str>) -> Result<DashboardConfig, DashboardError> {
    match path {
        Some(p) => parse_config(Path::new(p)).await,
        None => Ok(DashboardConfig::default()),
    }
}

/// Command-line flag, then config file, then the default file name.
pub fn resolve_dataset(flag: Option<&str>, config: &DashboardConfig) -> PathBuf {
    PathBuf::from(flag.or(config.dataset_path()).unwrap_or(DEFAULT_DATASET))
}

pub async fn open_store(flag: Option<&str>, config: &DashboardConfig) -> Result<RecordStore, DashboardError> {
    let path = resolve_dataset(flag, config);
    tokio::task::spawn_blocking(move || RecordStore::load(&path))
        .await
        .map_err(|e| DashboardError::Internal(format!("Dataset loader task failed: {}", e)))?
}
