//! Configuration file loading.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tc_api::ClientConfig;

use crate::error::{AppError, AppResult};

/// Contents of a thermocalc YAML config file.
///
/// ```yaml
/// api:
///   base_url: http://localhost:5000/api
///   timeout_secs: 30
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ClientConfig,
}

/// Load config from a YAML file.
pub fn load_config(path: &Path) -> AppResult<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config: AppConfig = serde_yaml::from_str(&content)
        .map_err(|e| AppError::ConfigParse(format!("{}: {}", path.display(), e)))?;

    Ok(config)
}

/// Client config from an optional file, with an optional base URL override.
pub fn resolve_client_config(
    config_path: Option<&Path>,
    base_url: Option<&str>,
) -> AppResult<ClientConfig> {
    let mut config = match config_path {
        Some(path) => load_config(path)?.api,
        None => ClientConfig::default(),
    };

    if let Some(url) = base_url {
        if url.trim().is_empty() {
            return Err(AppError::InvalidInput("base URL must not be empty".to_string()));
        }
        config.base_url = url.trim().to_string();
    }

    Ok(config)
}
